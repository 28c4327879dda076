//! Variance calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Difference between spending and plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variance {
    /// Actual minus planned.
    pub amount: Decimal,
    /// Variance relative to planned, in percent, two decimal places.
    ///
    /// Zero when nothing was planned: unplanned spend shows up in `amount`
    /// only, never as an infinite percentage.
    pub percent: Decimal,
}

impl Variance {
    /// Computes the variance of `actual` against `planned`.
    #[must_use]
    pub fn between(planned: Decimal, actual: Decimal) -> Self {
        let amount = actual - planned;

        let percent = if planned.is_zero() {
            Decimal::ZERO
        } else {
            amount
                .checked_div(planned)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .map_or(Decimal::ZERO, |pct| pct.round_dp(2))
        };

        Self { amount, percent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_overspend() {
        let v = Variance::between(dec!(1000), dec!(1200));
        assert_eq!(v.amount, dec!(200));
        assert_eq!(v.percent, dec!(20.00));
    }

    #[test]
    fn test_underspend() {
        let v = Variance::between(dec!(1000), dec!(800));
        assert_eq!(v.amount, dec!(-200));
        assert_eq!(v.percent, dec!(-20.00));
    }

    #[test]
    fn test_nothing_spent() {
        let v = Variance::between(dec!(100), dec!(0));
        assert_eq!(v.amount, dec!(-100));
        assert_eq!(v.percent, dec!(-100));
    }

    #[test]
    fn test_zero_plan_keeps_zero_percent() {
        let v = Variance::between(dec!(0), dec!(50));
        assert_eq!(v.amount, dec!(50));
        assert_eq!(v.percent, Decimal::ZERO);
    }

    #[test]
    fn test_percent_is_rounded() {
        let v = Variance::between(dec!(3), dec!(4));
        assert_eq!(v.percent, dec!(33.33));
    }
}
