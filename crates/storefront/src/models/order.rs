//! Checkout order types.
//!
//! An order exists only for the duration of a checkout request - it is
//! rendered into a confirmation email and then dropped, never persisted.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The order details submitted with a checkout request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    /// Line items; must be non-empty for a checkout to proceed.
    pub items: Vec<LineItem>,
    /// Caller-supplied order total. Rendered as given; line subtotals are
    /// computed server-side but the total is the caller's claim.
    pub total_amount: Decimal,
}

/// A single purchased item.
#[derive(Debug, Clone, Deserialize)]
pub struct LineItem {
    /// Product name as displayed in the cart.
    pub name: String,
    /// Unit price in USD.
    pub price: Decimal,
    /// Number of units purchased.
    pub quantity: u32,
}
