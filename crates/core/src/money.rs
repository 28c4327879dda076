//! Monetary precision shared by budget lines and actuals.

use rust_decimal::Decimal;

/// Decimal places amounts are stored with.
pub const MONEY_SCALE: u32 = 4;

/// Returns true when `amount` can be stored without rounding.
///
/// Trailing zeros do not count, so `1.50000` fits.
#[must_use]
pub fn fits_money_scale(amount: Decimal) -> bool {
    amount.normalize().scale() <= MONEY_SCALE
}
