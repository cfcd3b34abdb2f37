//! Email service for order-confirmation mail.
//!
//! Uses SMTP via lettre for delivery with Askama HTML templates.

use std::time::Duration;

use askama::Template;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;

use naksu_core::{Email, Usd, line_subtotal};

use crate::config::EmailConfig;
use crate::models::order::{LineItem, OrderDetails};

/// A line item prepared for template rendering: amounts pre-formatted as
/// two-decimal USD strings.
struct LineItemView {
    name: String,
    price: String,
    quantity: u32,
    subtotal: String,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            price: Usd(item.price).to_string(),
            quantity: item.quantity,
            subtotal: Usd(line_subtotal(item.price, item.quantity)).to_string(),
        }
    }
}

/// HTML template for the order confirmation email.
#[derive(Template)]
#[template(path = "email/order_confirmation.html")]
struct OrderConfirmationHtml<'a> {
    items: &'a [LineItemView],
    total: Usd,
}

/// Plain text template for the order confirmation email.
#[derive(Template)]
#[template(path = "email/order_confirmation.txt")]
struct OrderConfirmationText<'a> {
    items: &'a [LineItemView],
    total: Usd,
}

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// The relay did not answer within the configured bound.
    #[error("Mail dispatch timed out")]
    Timeout,
}

/// Email service for sending transactional mail.
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    send_timeout: Duration,
}

impl EmailService {
    /// Create a new email service from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the SMTP relay parameters are invalid.
    pub fn new(config: &EmailConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_string(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
            send_timeout: config.send_timeout,
        })
    }

    /// Send an order confirmation for a checkout.
    ///
    /// One dispatch per call; the order itself is never persisted.
    ///
    /// # Errors
    ///
    /// Returns error if a template fails to render, the message cannot be
    /// built, or the relay fails or times out.
    pub async fn send_order_confirmation(
        &self,
        to: &Email,
        order: &OrderDetails,
    ) -> Result<(), EmailError> {
        let items: Vec<LineItemView> = order.items.iter().map(Into::into).collect();
        let total = Usd(order.total_amount);

        let html = OrderConfirmationHtml {
            items: &items,
            total,
        }
        .render()?;
        let text = OrderConfirmationText {
            items: &items,
            total,
        }
        .render()?;

        self.send_multipart_email(to.as_str(), "Your Order Confirmation", &text, &html)
            .await
    }

    /// Send a multipart email with both plain text and HTML versions.
    async fn send_multipart_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| EmailError::InvalidAddress(to.to_string()))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )?;

        tokio::time::timeout(self.send_timeout, self.mailer.send(email))
            .await
            .map_err(|_| EmailError::Timeout)??;

        tracing::info!(to = %to, subject = %subject, "Email sent successfully");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_order() -> OrderDetails {
        OrderDetails {
            items: vec![
                LineItem {
                    name: "Green Tea".to_string(),
                    price: Decimal::from(10),
                    quantity: 2,
                },
                LineItem {
                    name: "Oolong".to_string(),
                    price: Decimal::from(5),
                    quantity: 3,
                },
            ],
            total_amount: Decimal::from(35),
        }
    }

    #[test]
    fn test_html_summary_contains_subtotals_and_total() {
        let order = sample_order();
        let items: Vec<LineItemView> = order.items.iter().map(Into::into).collect();

        let html = OrderConfirmationHtml {
            items: &items,
            total: Usd(order.total_amount),
        }
        .render()
        .unwrap();

        assert!(html.contains("Green Tea"));
        assert!(html.contains("$20.00"));
        assert!(html.contains("$15.00"));
        assert!(html.contains("Total Amount: $35.00"));
    }

    #[test]
    fn test_text_summary_contains_subtotals_and_total() {
        let order = sample_order();
        let items: Vec<LineItemView> = order.items.iter().map(Into::into).collect();

        let text = OrderConfirmationText {
            items: &items,
            total: Usd(order.total_amount),
        }
        .render()
        .unwrap();

        assert!(text.contains("Green Tea x2 - $20.00"));
        assert!(text.contains("Oolong x3 - $15.00"));
        assert!(text.contains("Total Amount: $35.00"));
    }

    #[test]
    fn test_html_escapes_item_names() {
        let items = [LineItemView::from(&LineItem {
            name: "Tea <& Co>".to_string(),
            price: Decimal::from(1),
            quantity: 1,
        })];

        let html = OrderConfirmationHtml {
            items: &items,
            total: Usd(Decimal::from(1)),
        }
        .render()
        .unwrap();

        assert!(html.contains("Tea &#60;&#38; Co&#62;") || html.contains("Tea &lt;&amp; Co&gt;"));
        assert!(!html.contains("Tea <& Co>"));
    }

    #[test]
    fn test_line_item_view_formats_unit_price() {
        let view = LineItemView::from(&LineItem {
            name: "Matcha".to_string(),
            price: Decimal::new(1250, 2),
            quantity: 4,
        });

        assert_eq!(view.price, "$12.50");
        assert_eq!(view.quantity, 4);
        assert_eq!(view.subtotal, "$50.00");
    }
}
