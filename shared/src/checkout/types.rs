//! Input error codes and calculation warnings

use serde::{Deserialize, Serialize};

// ============================================================================
// Input Error Codes
// ============================================================================

/// Machine-readable reason an input was rejected before any pipeline
/// stage ran.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputErrorCode {
    /// Non-positive or out-of-bounds quantity
    InvalidQuantity,
    /// Negative or out-of-bounds monetary amount
    InvalidAmount,
    /// Cart currency does not match the configured store currency
    UnknownCurrency,
    /// Malformed loyalty point redemption request
    InvalidPoints,
}

// ============================================================================
// Warnings
// ============================================================================

/// Non-fatal conditions recovered during a calculation.
///
/// The order total is still computed; the warning tells the caller which
/// requested adjustment was left out and why.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "kind")]
pub enum TotalWarning {
    /// Requested point redemption fell below the store minimum; the
    /// total was computed without redemption
    InsufficientPoints { requested: i64, minimum: i64 },
}
