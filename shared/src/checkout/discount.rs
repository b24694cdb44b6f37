//! Pre-resolved discount descriptors
//!
//! Which discounts apply to a cart is decided by the host's discount
//! matching; the engine receives the already-matched list and only
//! aggregates and nets amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What part of the order a discount reduces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountScope {
    /// Reduces the order subtotal
    Subtotal,
    /// Reduces the shipping charge
    Shipping,
    /// Reduces the order total after tax
    Total,
}

/// Resolved discount value.
///
/// Percentages are evaluated against the aggregation base the discount
/// is scoped to, never against a progressively discounted amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountValue {
    /// Fixed amount in the cart currency
    Amount(Decimal),
    /// Percentage of the base (30 = 30%)
    Percent(Decimal),
}

/// One applicable discount, as resolved by the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountAmount {
    /// Discount ID; lowest ID wins deterministic tie-breaks
    pub id: String,
    pub scope: DiscountScope,
    pub value: DiscountValue,
}

impl DiscountAmount {
    pub fn new(id: impl Into<String>, scope: DiscountScope, value: DiscountValue) -> Self {
        Self {
            id: id.into(),
            scope,
            value,
        }
    }
}

/// Store policy for combining several applicable discounts on one base.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountCombinationMode {
    /// Sum every discount's contribution against the original base
    #[default]
    CombineAll,
    /// Apply only the single discount with the greatest reduction
    HighestOnly,
}
