use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, MAX_AMOUNT, MONEY_DECIMAL_PRECISION};

/// Rounds half-up (away from zero) to two decimal places.
///
/// Used for every displayed percentage and average so results are
/// reproducible regardless of the platform's default rounding mode.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// `part / whole * 100`, rounded for display. Returns 0 when `whole <= 0`.
pub fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_display(part / whole * dec!(100))
}

/// Reason an amount was rejected, or `None` if it is a valid money amount.
///
/// `allow_zero` distinguishes filter bounds (zero allowed) from expense and
/// budget amounts (strictly positive).
pub fn amount_problem(amount: Decimal, allow_zero: bool) -> Option<&'static str> {
    if amount < Decimal::ZERO || (!allow_zero && amount.is_zero()) {
        return Some(if allow_zero {
            "must not be negative"
        } else {
            "must be greater than zero"
        });
    }
    if amount.normalize().scale() > MONEY_DECIMAL_PRECISION {
        return Some("must have at most 2 decimal places");
    }
    let max: Decimal = MAX_AMOUNT.parse().unwrap_or(Decimal::MAX);
    if amount > max {
        return Some("exceeds the maximum of 99999999.99");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_display_rounds_half_up() {
        assert_eq!(round_display(dec!(33.335)), dec!(33.34));
        assert_eq!(round_display(dec!(33.334)), dec!(33.33));
        assert_eq!(round_display(dec!(0.005)), dec!(0.01));
    }

    #[test]
    fn test_percentage_of_guards_zero_whole() {
        assert_eq!(percentage_of(dec!(10), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percentage_of(dec!(10), dec!(-5)), Decimal::ZERO);
        assert_eq!(percentage_of(dec!(1), dec!(3)), dec!(33.33));
    }

    #[test]
    fn test_amount_problem() {
        assert_eq!(amount_problem(dec!(12.50), false), None);
        assert_eq!(amount_problem(dec!(12.500), false), None);
        assert_eq!(
            amount_problem(Decimal::ZERO, false),
            Some("must be greater than zero")
        );
        assert_eq!(amount_problem(Decimal::ZERO, true), None);
        assert_eq!(amount_problem(dec!(-1), true), Some("must not be negative"));
        assert_eq!(
            amount_problem(dec!(1.234), false),
            Some("must have at most 2 decimal places")
        );
        assert!(amount_problem(dec!(100000000), false).is_some());
    }
}
