//! Checkout pricing calculation engine
//!
//! Turns a cart snapshot (line items, pre-resolved discounts, shipping
//! attributes, tax categories, loyalty point requests) into a fully
//! itemized order total:
//!
//! subtotal → discounts → shipping → tax → loyalty points → grand total
//!
//! The engine is pure and stateless per call. External lookups (tax
//! rates, discount matching, customer-group shipping terms) are
//! injected as resolved data or synchronous resolver traits, so the
//! core stays independently testable and safe for unlimited concurrent
//! use with independent cart snapshots. All arithmetic runs on
//! `rust_decimal::Decimal`; binary floating point never enters a money
//! path, and every reported figure is rounded through the store
//! currency's rounding policy exactly once.

pub mod error;
pub mod money;
pub mod pricing;
pub mod validation;

// Re-exports
pub use error::{ResolverError, TotalError};
pub use money::{round, round_currency};
pub use pricing::order_calculator::compute_order_total;
pub use pricing::points::{amount_to_points, meets_minimum_usage, points_to_amount};
pub use pricing::resolvers::{DiscountResolver, FixedDiscounts, FixedTaxRates, TaxRateResolver};
