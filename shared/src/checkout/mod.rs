//! Checkout domain types
//!
//! Inputs and outputs of the order total calculation:
//!
//! - **cart**: cart snapshot, cart lines, customer profile
//! - **discount**: pre-resolved discount descriptors
//! - **shipping**: customer-group shipping rate adjustments
//! - **settings**: store-level pricing configuration
//! - **result**: the itemized order total returned to callers
//! - **types**: input error codes and calculation warnings

pub mod cart;
pub mod discount;
pub mod result;
pub mod settings;
pub mod shipping;
pub mod types;

// Re-exports
pub use cart::{CartLine, CheckoutCart, CustomerProfile};
pub use discount::{DiscountAmount, DiscountCombinationMode, DiscountScope, DiscountValue};
pub use result::{LineTotal, OrderTotalResult, TaxLine};
pub use settings::{StoreSettings, TaxDisplayMode};
pub use shipping::{GroupShippingRate, RateAdjustment};
pub use types::{InputErrorCode, TotalWarning};
