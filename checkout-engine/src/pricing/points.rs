//! Loyalty point conversion
//!
//! Pure functions over caller-supplied settings. The engine computes
//! hypothetical conversions only; point balances are owned and mutated
//! by the host.

use rust_decimal::prelude::*;
use shared::money::{Currency, Money};

use crate::money::round_currency;

/// Currency value of a number of points at the store exchange rate,
/// rounded through the currency's rounding policy.
pub fn points_to_amount(points: i64, exchange_rate: Decimal, currency: &Currency) -> Money {
    let amount = Decimal::from(points) * exchange_rate;
    Money::new(round_currency(amount, currency), currency.code.clone())
}

/// Points worth of a currency amount, truncated toward zero so the
/// conversion never grants more value than was paid.
pub fn amount_to_points(amount: Decimal, exchange_rate: Decimal) -> i64 {
    if exchange_rate <= Decimal::ZERO {
        return 0;
    }
    (amount / exchange_rate).trunc().to_i64().unwrap_or(0)
}

/// Whether a redemption request meets the store minimum. A zero
/// threshold always permits use.
pub fn meets_minimum_usage(points: i64, minimum: i64) -> bool {
    points >= minimum
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn eur() -> Currency {
        Currency::standard("EUR")
    }

    #[test]
    fn test_points_to_amount_at_unit_rate() {
        let money = points_to_amount(10, dec!(1), &eur());
        assert_eq!(money.amount, dec!(10));
        assert_eq!(money.currency, "EUR");
    }

    #[test]
    fn test_amount_to_points_at_unit_rate() {
        assert_eq!(amount_to_points(dec!(10), dec!(1)), 10);
    }

    #[test]
    fn test_points_to_amount_rounds_through_policy() {
        // 3 points at 0.333 = 0.999 -> 1.00 at two decimals
        let money = points_to_amount(3, dec!(0.333), &eur());
        assert_eq!(money.amount, dec!(1.00));
    }

    #[test]
    fn test_amount_to_points_truncates_toward_zero() {
        assert_eq!(amount_to_points(dec!(9.99), dec!(1)), 9);
        assert_eq!(amount_to_points(dec!(10), dec!(3)), 3);
        assert_eq!(amount_to_points(dec!(-9.99), dec!(1)), -9);
    }

    #[test]
    fn test_amount_to_points_zero_rate() {
        assert_eq!(amount_to_points(dec!(100), Decimal::ZERO), 0);
        assert_eq!(amount_to_points(dec!(100), dec!(-1)), 0);
    }

    #[test]
    fn test_round_trip_never_overshoots() {
        for (points, rate) in [
            (10i64, dec!(1)),
            (7, dec!(0.03)),
            (123, dec!(0.07)),
            (999, dec!(1.5)),
        ] {
            let amount = points_to_amount(points, rate, &eur());
            assert!(
                amount_to_points(amount.amount, rate) <= points,
                "points {points} rate {rate}"
            );
        }
    }

    #[test]
    fn test_minimum_usage_gate() {
        assert!(!meets_minimum_usage(10, 20));
        assert!(meets_minimum_usage(20, 20));
        assert!(meets_minimum_usage(25, 20));
        // Zero threshold always permits
        assert!(meets_minimum_usage(0, 0));
        assert!(meets_minimum_usage(1, 0));
    }
}
