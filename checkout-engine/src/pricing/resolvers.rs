//! Collaborator seams
//!
//! Tax rates and applicable discounts are decided outside this engine.
//! The orchestrator resolves them through these traits exactly once,
//! before the pure pipeline runs; a resolver failure aborts the whole
//! calculation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::checkout::{CheckoutCart, CustomerProfile, DiscountAmount};

use crate::error::ResolverError;

/// Resolves a tax category to a percent rate for a customer.
pub trait TaxRateResolver {
    fn resolve(
        &self,
        tax_category: &str,
        customer: &CustomerProfile,
    ) -> Result<Decimal, ResolverError>;
}

/// Resolves the discounts applicable to a cart. Eligibility and
/// matching happen in the host; the engine only aggregates the result.
pub trait DiscountResolver {
    fn resolve(
        &self,
        cart: &CheckoutCart,
        customer: &CustomerProfile,
    ) -> Result<Vec<DiscountAmount>, ResolverError>;
}

/// In-memory category-to-rate table. Used by tests and by hosts that
/// resolve rates ahead of time.
#[derive(Debug, Clone, Default)]
pub struct FixedTaxRates {
    rates: BTreeMap<String, Decimal>,
}

impl FixedTaxRates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, tax_category: impl Into<String>, rate: Decimal) -> Self {
        self.rates.insert(tax_category.into(), rate);
        self
    }
}

impl TaxRateResolver for FixedTaxRates {
    fn resolve(
        &self,
        tax_category: &str,
        _customer: &CustomerProfile,
    ) -> Result<Decimal, ResolverError> {
        self.rates.get(tax_category).copied().ok_or_else(|| {
            ResolverError::TaxRate(format!("no rate configured for category '{tax_category}'"))
        })
    }
}

/// Pre-resolved discount list.
#[derive(Debug, Clone, Default)]
pub struct FixedDiscounts {
    discounts: Vec<DiscountAmount>,
}

impl FixedDiscounts {
    pub fn new(discounts: Vec<DiscountAmount>) -> Self {
        Self { discounts }
    }

    /// No applicable discounts.
    pub fn none() -> Self {
        Self::default()
    }
}

impl DiscountResolver for FixedDiscounts {
    fn resolve(
        &self,
        _cart: &CheckoutCart,
        _customer: &CustomerProfile,
    ) -> Result<Vec<DiscountAmount>, ResolverError> {
        Ok(self.discounts.clone())
    }
}
