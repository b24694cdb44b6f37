//! Customer-group shipping rate adjustments
//!
//! Supplied to the engine as a read-only table resolved before the
//! pipeline runs (`group_id -> GroupShippingRate`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Adjustment a customer group applies to the base shipping rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateAdjustment {
    /// Percentage change of the base rate (-10 = 10% cheaper)
    Percentage(Decimal),
    /// Fixed addition to the base rate (negative for a group discount)
    Fixed(Decimal),
}

/// Shipping terms configured for one customer group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GroupShippingRate {
    /// Rate adjustment, if the group has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<RateAdjustment>,
    /// Whether membership grants free shipping outright
    #[serde(default)]
    pub free_shipping: bool,
}
