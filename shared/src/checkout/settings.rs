//! Store-level pricing configuration

use crate::money::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::discount::DiscountCombinationMode;

/// Whether prices shown to the customer already include tax.
///
/// Switching display mode re-splits the same underlying figures between
/// net and tax; it never changes the grand total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxDisplayMode {
    /// Sub-figures are net of tax; tax is listed separately
    #[default]
    ExcludingTax,
    /// Sub-figures are gross; tax is shown as an informational split
    IncludingTax,
}

/// Store settings the calculation reads. Resolved once by the host and
/// passed in; the engine holds no configuration state of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreSettings {
    pub currency: Currency,
    #[serde(default)]
    pub tax_display: TaxDisplayMode,
    /// Storage convention of entered prices: true when cart line prices
    /// and shipping rates already contain tax
    #[serde(default)]
    pub prices_include_tax: bool,
    /// Master tax switch; off means every order is tax free
    #[serde(default = "default_true")]
    pub tax_enabled: bool,
    #[serde(default)]
    pub discount_mode: DiscountCombinationMode,
    /// Whether the shipping charge is taxed
    #[serde(default)]
    pub shipping_is_taxable: bool,
    /// Tax category the shipping charge belongs to when taxable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_tax_category: Option<String>,
    /// Cart-level free shipping once the discounted subtotal reaches
    /// this threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_shipping_over: Option<Decimal>,
    /// Currency value of one loyalty point
    #[serde(default)]
    pub points_exchange_rate: Decimal,
    /// Minimum points a customer must redeem at once; zero disables the
    /// gate
    #[serde(default)]
    pub minimum_points_to_use: i64,
}

fn default_true() -> bool {
    true
}

impl StoreSettings {
    /// Plain two-decimal store with taxes on and no extras configured.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            currency,
            tax_display: TaxDisplayMode::default(),
            prices_include_tax: false,
            tax_enabled: true,
            discount_mode: DiscountCombinationMode::default(),
            shipping_is_taxable: false,
            shipping_tax_category: None,
            free_shipping_over: None,
            points_exchange_rate: Decimal::ZERO,
            minimum_points_to_use: 0,
        }
    }
}
