//! Order total result
//!
//! Constructed once per calculation, immutable, returned to the caller.
//! Never persisted by the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;

use super::types::TotalWarning;

/// One rate's share of the tax total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxLine {
    /// Tax rate in percent (21 = 21%)
    pub rate: Decimal,
    pub amount: Money,
}

/// Computed total for one cart line (display aid for hosts).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotal {
    pub product_id: String,
    pub line_total: Money,
}

/// Fully itemized order total.
///
/// Every monetary field has been rounded through the store currency's
/// rounding policy exactly once; nothing here is an unrounded
/// intermediate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderTotalResult {
    /// Subtotal before discounts, in display-mode figures
    pub subtotal: Money,
    /// Subtotal-scoped discount actually applied
    pub discount_total: Money,
    /// Subtotal after discount, in display-mode figures
    pub subtotal_with_discount: Money,
    /// Shipping charge, in display-mode figures
    pub shipping_total: Money,
    /// Total-scoped discount applied to the order total after tax
    pub order_discount_total: Money,
    pub tax_total: Money,
    /// Per-rate tax breakdown, sorted by rate ascending
    pub tax_breakdown: Vec<TaxLine>,
    /// Loyalty points actually redeemed
    pub redeemed_points: i64,
    /// Currency value of the redeemed points
    pub redeemed_points_amount: Money,
    pub grand_total: Money,
    /// Per-line totals (entered-price figures)
    pub line_totals: Vec<LineTotal>,
    /// Non-fatal conditions recovered during calculation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<TotalWarning>,
}
