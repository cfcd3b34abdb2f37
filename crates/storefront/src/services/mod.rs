//! Services for the storefront.
//!
//! - [`auth`] - Password signup and login
//! - [`email`] - SMTP order-confirmation mail

pub mod auth;
pub mod email;

pub use auth::{AuthError, AuthService};
pub use email::{EmailError, EmailService};
