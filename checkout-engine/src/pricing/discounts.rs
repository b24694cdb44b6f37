//! Discount aggregation
//!
//! Combines a pre-resolved discount list into one reduction against a
//! base amount. Percentage contributions always evaluate against the
//! original base, never against a progressively discounted one, and the
//! combined reduction is clamped so the discounted base floors at zero.

use rust_decimal::Decimal;
use shared::checkout::{DiscountAmount, DiscountCombinationMode, DiscountScope, DiscountValue};
use shared::money::Currency;

use crate::money::round_currency;

/// Aggregated reduction for one base amount.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedDiscount {
    /// Reduction to subtract from the base, rounded, clamped to the base
    pub amount: Decimal,
    /// IDs of the discounts that contributed, in application order
    pub applied: Vec<String>,
}

impl AggregatedDiscount {
    pub fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
            applied: vec![],
        }
    }
}

/// Split a resolved discount list into subtotal-, shipping- and
/// total-scoped groups for the pipeline stages.
pub fn partition_by_scope(
    discounts: Vec<DiscountAmount>,
) -> (
    Vec<DiscountAmount>,
    Vec<DiscountAmount>,
    Vec<DiscountAmount>,
) {
    let mut subtotal = vec![];
    let mut shipping = vec![];
    let mut total = vec![];
    for discount in discounts {
        match discount.scope {
            DiscountScope::Subtotal => subtotal.push(discount),
            DiscountScope::Shipping => shipping.push(discount),
            DiscountScope::Total => total.push(discount),
        }
    }
    (subtotal, shipping, total)
}

/// A single discount's currency reduction against `base`.
fn contribution(discount: &DiscountAmount, base: Decimal) -> Decimal {
    match discount.value {
        DiscountValue::Amount(amount) => amount,
        DiscountValue::Percent(percent) => base * percent / Decimal::ONE_HUNDRED,
    }
}

/// Aggregate `discounts` against `base` under the store combination
/// mode. The reported amount is rounded through the currency's rounding
/// policy.
pub fn aggregate(
    base: Decimal,
    discounts: &[DiscountAmount],
    mode: DiscountCombinationMode,
    currency: &Currency,
) -> AggregatedDiscount {
    if discounts.is_empty() {
        return AggregatedDiscount::zero();
    }

    let (total, applied) = match mode {
        DiscountCombinationMode::CombineAll => {
            let mut total = Decimal::ZERO;
            let mut applied = Vec::with_capacity(discounts.len());
            for discount in discounts {
                total += contribution(discount, base);
                applied.push(discount.id.clone());
            }
            (total, applied)
        }
        DiscountCombinationMode::HighestOnly => {
            let mut best: Option<(&DiscountAmount, Decimal)> = None;
            for discount in discounts {
                let amount = contribution(discount, base);
                let wins = match &best {
                    None => true,
                    Some((current, current_amount)) => {
                        amount > *current_amount
                            || (amount == *current_amount && discount.id < current.id)
                    }
                };
                if wins {
                    best = Some((discount, amount));
                }
            }
            let (winner, amount) = best.expect("non-empty discount list");
            (amount, vec![winner.id.clone()])
        }
    };

    // The discounted base must not go negative
    let clamped = total.min(base).max(Decimal::ZERO);

    AggregatedDiscount {
        amount: round_currency(clamped, currency),
        applied,
    }
}
