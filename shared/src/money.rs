//! Money and currency configuration types
//!
//! Monetary values are `rust_decimal::Decimal` end to end; binary
//! floating point never enters a calculation path. A [`Money`] value is
//! a decimal amount tagged with the currency it is denominated in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Money
// ============================================================================

/// A decimal amount tagged with a currency code.
///
/// Engine outputs are always `Money`; inputs carry bare `Decimal`
/// amounts denominated in the cart currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    /// ISO 4217 code, e.g. "EUR"
    pub currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    pub fn zero(currency: impl Into<String>) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

// ============================================================================
// Rounding Configuration
// ============================================================================

/// Cash rounding convention for a currency.
///
/// `Nearest` is plain decimal rounding to the currency's precision. The
/// cash variants additionally snap the sub-unit remainder to the
/// smallest physically available denomination (0.05, 0.10, 0.50 or
/// whole units), with the up/down asymmetries cash registers use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingPolicy {
    /// Round to the currency's decimal places, no cash snapping
    #[default]
    Nearest,
    /// Snap to 0.05, remainder rounds toward the higher boundary
    CashUp005,
    /// Snap to 0.05, remainder rounds toward the lower boundary
    CashDown005,
    /// Snap to 0.10, always toward the higher boundary
    CashUp01,
    /// Snap to 0.10, exact halves fall to the lower boundary
    CashDown01,
    /// Snap to 0.50 (nearest)
    Cash05,
    /// Snap to whole units (nearest)
    Cash1,
    /// Snap to whole units, always up
    Cash1Up,
}

/// Parse failure for a rounding policy configuration code.
///
/// A configuration referencing an unrecognized policy is a fatal setup
/// error, not a per-request condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rounding policy code: {0}")]
pub struct UnknownRoundingPolicy(pub String);

impl FromStr for RoundingPolicy {
    type Err = UnknownRoundingPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEAREST" => Ok(Self::Nearest),
            "CASH_UP005" => Ok(Self::CashUp005),
            "CASH_DOWN005" => Ok(Self::CashDown005),
            "CASH_UP01" => Ok(Self::CashUp01),
            "CASH_DOWN01" => Ok(Self::CashDown01),
            "CASH05" => Ok(Self::Cash05),
            "CASH1" => Ok(Self::Cash1),
            "CASH1_UP" => Ok(Self::Cash1Up),
            other => Err(UnknownRoundingPolicy(other.to_string())),
        }
    }
}

/// How a value exactly halfway between two representable results rounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MidpointRounding {
    /// Round half to even (bankers rounding)
    ToEven,
    /// Round half away from zero
    #[default]
    AwayFromZero,
}

// ============================================================================
// Currency
// ============================================================================

/// Currency definition: precision plus the rounding conventions every
/// reported figure in that currency goes through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Currency {
    /// ISO 4217 code, e.g. "EUR"
    pub code: String,
    /// Number of minor-unit decimal places (2 for most currencies)
    pub decimal_places: u32,
    pub rounding_policy: RoundingPolicy,
    #[serde(default)]
    pub midpoint: MidpointRounding,
}

impl Currency {
    /// Two-decimal currency with plain nearest rounding.
    pub fn standard(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            decimal_places: 2,
            rounding_policy: RoundingPolicy::Nearest,
            midpoint: MidpointRounding::AwayFromZero,
        }
    }
}
