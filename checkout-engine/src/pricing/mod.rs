//! Pricing pipeline
//!
//! One module per calculation concern:
//!
//! - **discounts**: aggregation of pre-resolved discounts
//! - **shipping**: shipping charge and free-shipping eligibility
//! - **tax**: tax splitting, display modes, per-rate aggregation
//! - **points**: loyalty point conversion
//! - **resolvers**: collaborator seams for tax rates and discounts
//! - **order_calculator**: the orchestrating pipeline

pub mod discounts;
pub mod order_calculator;
pub mod points;
pub mod resolvers;
pub mod shipping;
pub mod tax;

pub use order_calculator::compute_order_total;
