//! Cart snapshot types
//!
//! Immutable snapshots handed to the engine by the caller. The engine
//! never mutates them; a fresh snapshot is taken per calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One cart line: a product reference with its pricing and shipping
/// attributes at snapshot time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product ID
    pub product_id: String,
    /// Unit price in the cart currency
    pub unit_price: Decimal,
    /// Quantity (positive)
    pub quantity: i32,
    /// Whether this product ships at all
    pub is_ship_enabled: bool,
    /// Whether this product ships free
    pub is_free_shipping: bool,
    /// Per-unit-independent additional shipping charge for the line
    #[serde(default)]
    pub additional_shipping_charge: Decimal,
    /// Tax category reference, resolved to a rate by the host
    pub tax_category: String,
}

/// Cart snapshot entering the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutCart {
    pub lines: Vec<CartLine>,
    /// ISO 4217 code the line amounts are denominated in
    pub currency: String,
    /// Base shipping rate quoted by the host's carrier integration
    #[serde(default)]
    pub shipping_rate: Decimal,
    /// Loyalty points the customer asked to redeem on this order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redeem_points: Option<i64>,
}

/// Customer attributes the calculation depends on, resolved by the host
/// before the pipeline runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerProfile {
    /// Customer ID
    pub id: String,
    /// Tax-exempt customers pay zero tax in every display mode
    #[serde(default)]
    pub is_tax_exempt: bool,
    /// Customer group memberships (shipping rate adjustments key off these)
    #[serde(default)]
    pub group_ids: Vec<String>,
    /// Current loyalty point balance
    #[serde(default)]
    pub loyalty_points_balance: i64,
}
