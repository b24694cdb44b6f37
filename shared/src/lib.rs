//! Shared types for the checkout pricing workspace
//!
//! Domain types consumed by the calculation engine and by host
//! applications (checkout flow, cart preview, admin recalculation):
//! cart snapshots, discount descriptors, store settings, currency and
//! rounding configuration, and the order total result.

pub mod checkout;
pub mod money;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Money re-exports (for convenient access)
pub use money::{Currency, MidpointRounding, Money, RoundingPolicy, UnknownRoundingPolicy};
