//! Monetary rounding engine
//!
//! All calculations run on `Decimal`; binary floating point never
//! enters a money path. [`round`] applies the currency's baseline
//! decimal rounding and then, for cash policies, snaps the sub-unit
//! remainder to the smallest physically available denomination.
//!
//! The cash adjustment table is one small function per policy variant,
//! dispatched by a single `match`, with every adjustment expressed in
//! hundredths of the base unit.

use rust_decimal::prelude::*;
use shared::money::{Currency, MidpointRounding, RoundingPolicy};

const FIVE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
const TWENTY_FIVE: Decimal = Decimal::from_parts(25, 0, 0, false, 0);
const FIFTY: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
const SEVENTY_FIVE: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

fn strategy(midpoint: MidpointRounding) -> RoundingStrategy {
    match midpoint {
        MidpointRounding::ToEven => RoundingStrategy::MidpointNearestEven,
        MidpointRounding::AwayFromZero => RoundingStrategy::MidpointAwayFromZero,
    }
}

/// Round `value` to `decimals` places under `midpoint`, then apply the
/// cash policy's snap to the sub-unit remainder.
///
/// Negative amounts round symmetrically: the cash adjustment operates
/// on the magnitude and the sign is reapplied, so
/// `round(-x) == -round(x)` for every policy.
pub fn round(
    value: Decimal,
    decimals: u32,
    policy: RoundingPolicy,
    midpoint: MidpointRounding,
) -> Decimal {
    let rounded = value.round_dp_with_strategy(decimals, strategy(midpoint));
    if policy == RoundingPolicy::Nearest {
        return rounded;
    }
    if rounded < Decimal::ZERO {
        -cash_round(-rounded, policy)
    } else {
        cash_round(rounded, policy)
    }
}

/// Round through a currency's configured precision, policy and midpoint
/// mode.
pub fn round_currency(value: Decimal, currency: &Currency) -> Decimal {
    round(
        value,
        currency.decimal_places,
        currency.rounding_policy,
        currency.midpoint,
    )
}

/// Cash-snap a non-negative, already baseline-rounded amount.
///
/// The 0.05/0.10 policies work from the hundredths digit alone (a zero
/// digit means the value is already on their grid); the 0.50 and
/// whole-unit policies snap the full sub-unit remainder, so a value
/// like 10.30 still moves under them.
fn cash_round(rounded: Decimal, policy: RoundingPolicy) -> Decimal {
    let frac = rounded - rounded.trunc();
    let scaled = frac * Decimal::TEN;

    // Hundredths digit (0..10 for two-decimal amounts) and the full
    // two-decimal remainder (0..100).
    let digit = (scaled - scaled.trunc()) * Decimal::TEN;
    let remainder = frac * Decimal::ONE_HUNDRED;

    let adjustment = match policy {
        RoundingPolicy::Nearest => Decimal::ZERO,
        RoundingPolicy::CashUp005 => adjust_up_005(digit),
        RoundingPolicy::CashDown005 => adjust_down_005(digit),
        RoundingPolicy::CashUp01 => adjust_up_01(digit),
        RoundingPolicy::CashDown01 => adjust_down_01(digit),
        RoundingPolicy::Cash05 => adjust_05(remainder),
        RoundingPolicy::Cash1 => adjust_1(remainder),
        RoundingPolicy::Cash1Up => adjust_1_up(remainder),
    };

    rounded + adjustment / Decimal::ONE_HUNDRED
}

/// 0.05 steps, remainder toward the higher boundary; 0 and an exact 5
/// are already on the grid.
fn adjust_up_005(digit: Decimal) -> Decimal {
    if digit.is_zero() {
        Decimal::ZERO
    } else if digit > FIVE {
        Decimal::TEN - digit
    } else {
        FIVE - digit
    }
}

/// 0.05 steps, remainder toward the lower boundary; 0 and an exact 5
/// are already on the grid.
fn adjust_down_005(digit: Decimal) -> Decimal {
    if digit > FIVE {
        FIVE - digit
    } else if digit == FIVE {
        Decimal::ZERO
    } else {
        -digit
    }
}

/// 0.10 steps, always toward the higher boundary; 0 is on the grid.
fn adjust_up_01(digit: Decimal) -> Decimal {
    if digit.is_zero() {
        Decimal::ZERO
    } else {
        Decimal::TEN - digit
    }
}

/// 0.10 steps; the exact half flips down instead of rounding up.
fn adjust_down_01(digit: Decimal) -> Decimal {
    if digit.is_zero() {
        Decimal::ZERO
    } else if digit == FIVE {
        -FIVE
    } else {
        Decimal::TEN - digit
    }
}

/// 0.50 steps: below 0.25 down, below 0.75 to the half, else up.
fn adjust_05(remainder: Decimal) -> Decimal {
    if remainder < TWENTY_FIVE {
        -remainder
    } else if remainder < SEVENTY_FIVE {
        FIFTY - remainder
    } else {
        Decimal::ONE_HUNDRED - remainder
    }
}

/// Whole units, nearest.
fn adjust_1(remainder: Decimal) -> Decimal {
    if remainder < FIFTY {
        -remainder
    } else {
        Decimal::ONE_HUNDRED - remainder
    }
}

/// Whole units, always up when any positive remainder exists.
fn adjust_1_up(remainder: Decimal) -> Decimal {
    if remainder.is_zero() {
        Decimal::ZERO
    } else {
        Decimal::ONE_HUNDRED - remainder
    }
}
