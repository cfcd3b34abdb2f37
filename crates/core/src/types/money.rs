//! Money arithmetic and display for order amounts.
//!
//! Checkout is the only money-handling flow: line subtotals are computed
//! server-side and rendered with two decimal places, USD only. Decimal
//! arithmetic avoids the float rounding artifacts that binary floating
//! point would introduce into prices like 0.1.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

/// A USD amount rendered with a dollar sign and exactly two decimals.
///
/// ```
/// use naksu_core::Usd;
/// use rust_decimal::Decimal;
///
/// assert_eq!(Usd(Decimal::new(205, 1)).to_string(), "$20.50");
/// assert_eq!(Usd(Decimal::from(7)).to_string(), "$7.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usd(pub Decimal);

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "${rounded:.2}")
    }
}

/// Compute a line-item subtotal: unit price times quantity.
#[must_use]
pub fn line_subtotal(unit_price: Decimal, quantity: u32) -> Decimal {
    unit_price * Decimal::from(quantity)
}
