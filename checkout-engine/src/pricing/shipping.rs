//! Shipping charge calculation
//!
//! Combines the externally quoted base rate, customer-group rate
//! adjustments, per-line additional charges and shipping-scoped
//! discounts. Any free-shipping grant forces the whole charge to zero
//! regardless of summed surcharges.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::checkout::{
    CartLine, CustomerProfile, DiscountAmount, GroupShippingRate, RateAdjustment, StoreSettings,
};

use super::discounts::aggregate;

/// Computed shipping charge (unrounded; the orchestrator rounds the
/// reported figure once at finalization).
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingCharge {
    /// Total charge after adjustments and discounts
    pub amount: Decimal,
    /// Summed per-line additional charges (free-flagged lines excluded)
    pub surcharge: Decimal,
    /// Whether a free-shipping grant zeroed the charge
    pub is_free: bool,
}

impl ShippingCharge {
    fn free(surcharge: Decimal) -> Self {
        Self {
            amount: Decimal::ZERO,
            surcharge,
            is_free: true,
        }
    }

    fn none() -> Self {
        Self {
            amount: Decimal::ZERO,
            surcharge: Decimal::ZERO,
            is_free: false,
        }
    }
}

/// Base rate after the customer's cheapest group adjustment.
///
/// Percentage adjustments scale the rate, fixed ones add to it (negative
/// values model group discounts). Among the customer's groups the
/// cheapest adjusted rate wins; ties break toward the lowest group ID.
fn adjusted_base_rate(
    base_rate: Decimal,
    customer: &CustomerProfile,
    group_rates: &BTreeMap<String, GroupShippingRate>,
) -> Decimal {
    let mut group_ids: Vec<&String> = customer.group_ids.iter().collect();
    group_ids.sort();
    group_ids.dedup();

    let mut best: Option<Decimal> = None;
    for group_id in group_ids {
        let Some(group) = group_rates.get(group_id) else {
            continue;
        };
        let Some(adjustment) = group.adjustment else {
            continue;
        };
        let adjusted = match adjustment {
            RateAdjustment::Percentage(percent) => {
                base_rate * (Decimal::ONE_HUNDRED + percent) / Decimal::ONE_HUNDRED
            }
            RateAdjustment::Fixed(amount) => base_rate + amount,
        };
        let adjusted = adjusted.max(Decimal::ZERO);
        // Sorted iteration makes the first cheapest rate the lowest-ID one
        if best.is_none_or(|current| adjusted < current) {
            best = Some(adjusted);
        }
    }
    best.unwrap_or(base_rate)
}

/// Compute the shipping charge for a cart.
///
/// `discounted_subtotal` feeds the cart-level free-shipping threshold.
pub fn compute_shipping(
    lines: &[CartLine],
    base_rate: Decimal,
    customer: &CustomerProfile,
    group_rates: &BTreeMap<String, GroupShippingRate>,
    shipping_discounts: &[DiscountAmount],
    discounted_subtotal: Decimal,
    settings: &StoreSettings,
) -> ShippingCharge {
    let ship_lines: Vec<&CartLine> = lines.iter().filter(|l| l.is_ship_enabled).collect();

    // Nothing to ship
    if ship_lines.is_empty() {
        return ShippingCharge::none();
    }

    let surcharge: Decimal = ship_lines
        .iter()
        .filter(|l| !l.is_free_shipping)
        .map(|l| l.additional_shipping_charge)
        .sum();

    // Any grant forces the whole charge to zero, surcharges included
    let line_grants_free = ship_lines.iter().any(|l| l.is_free_shipping);
    let group_grants_free = customer
        .group_ids
        .iter()
        .any(|g| group_rates.get(g).is_some_and(|r| r.free_shipping));
    let over_threshold = settings
        .free_shipping_over
        .is_some_and(|threshold| discounted_subtotal >= threshold);
    if line_grants_free || group_grants_free || over_threshold {
        return ShippingCharge::free(surcharge);
    }

    let rate = adjusted_base_rate(base_rate, customer, group_rates);
    let before_discounts = rate + surcharge;

    // Shipping-scoped discounts subtract last, floored at zero
    let discount = aggregate(
        before_discounts,
        shipping_discounts,
        settings.discount_mode,
        &settings.currency,
    );
    let amount = (before_discounts - discount.amount).max(Decimal::ZERO);

    ShippingCharge {
        amount,
        surcharge,
        is_free: false,
    }
}
