//! Core types for Naksu.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod money;
pub mod name;

pub use email::{Email, EmailError};
pub use money::{Usd, line_subtotal};
pub use name::{PersonName, PersonNameError};
