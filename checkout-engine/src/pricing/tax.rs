//! Tax calculation
//!
//! The engine owns the combination and display-mode arithmetic; the
//! category-to-rate lookup is an injected collaborator. Prices entered
//! tax-inclusive have their tax component backed out
//! (`tax = base * rate / (100 + rate)`); tax-exclusive prices have it
//! added on top. Per-rate buckets accumulate unrounded and the total is
//! rounded exactly once, so cumulative drift never exceeds what a
//! single rounding admits.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::checkout::TaxDisplayMode;

/// Net/tax split of one base amount. `gross = net + tax` always.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxSplit {
    pub net: Decimal,
    pub tax: Decimal,
}

impl TaxSplit {
    pub fn untaxed(base: Decimal) -> Self {
        Self {
            net: base,
            tax: Decimal::ZERO,
        }
    }

    /// Reconstruct a split from an entered aggregate and the tax
    /// already computed for it under the store's price convention.
    pub fn from_total(entered: Decimal, tax: Decimal, prices_include_tax: bool) -> Self {
        if prices_include_tax {
            Self {
                net: entered - tax,
                tax,
            }
        } else {
            Self { net: entered, tax }
        }
    }

    pub fn gross(&self) -> Decimal {
        self.net + self.tax
    }

    /// The figure a result reports for this amount: `net` under
    /// `ExcludingTax`, `gross` under `IncludingTax`. Switching display
    /// mode re-splits the same figures; the gross amount (and with it
    /// the grand total) never changes.
    pub fn display_amount(&self, display: TaxDisplayMode) -> Decimal {
        match display {
            TaxDisplayMode::ExcludingTax => self.net,
            TaxDisplayMode::IncludingTax => self.gross(),
        }
    }
}

/// Split `base` into net and tax under the store's price convention.
///
/// `rate` is a percentage (21 = 21%).
pub fn split_tax(base: Decimal, rate: Decimal, prices_include_tax: bool) -> TaxSplit {
    if rate <= Decimal::ZERO {
        return TaxSplit::untaxed(base);
    }
    if prices_include_tax {
        let tax = base * rate / (Decimal::ONE_HUNDRED + rate);
        TaxSplit {
            net: base - tax,
            tax,
        }
    } else {
        TaxSplit {
            net: base,
            tax: base * rate / Decimal::ONE_HUNDRED,
        }
    }
}

/// Unrounded per-rate tax totals for a set of rate buckets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxTotals {
    /// Sum of every bucket's tax, unrounded
    pub total: Decimal,
    /// Tax per positive rate, ascending, unrounded
    pub by_rate: Vec<(Decimal, Decimal)>,
}

/// Aggregate tax over per-rate base buckets.
///
/// Zero-rate buckets contribute no breakdown entry. Callers round the
/// total (and any displayed entry) through the rounding engine.
pub fn compute_tax_totals(
    bases_by_rate: &BTreeMap<Decimal, Decimal>,
    prices_include_tax: bool,
) -> TaxTotals {
    let mut totals = TaxTotals::default();
    for (&rate, &base) in bases_by_rate {
        if rate <= Decimal::ZERO {
            continue;
        }
        let split = split_tax(base, rate, prices_include_tax);
        totals.total += split.tax;
        totals.by_rate.push((rate, split.tax));
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ==================== Split ====================

    #[test]
    fn test_split_exclusive_adds_on_top() {
        let split = split_tax(dec!(100), dec!(21), false);
        assert_eq!(split.net, dec!(100));
        assert_eq!(split.tax, dec!(21));
        assert_eq!(split.gross(), dec!(121));
    }

    #[test]
    fn test_split_inclusive_backs_out() {
        // 121.00 gross at 21% -> 21.00 tax, 100.00 net
        let split = split_tax(dec!(121), dec!(21), true);
        assert_eq!(split.tax, dec!(21));
        assert_eq!(split.net, dec!(100));
        assert_eq!(split.gross(), dec!(121));
    }

    #[test]
    fn test_split_zero_rate() {
        let split = split_tax(dec!(50), Decimal::ZERO, true);
        assert_eq!(split, TaxSplit::untaxed(dec!(50)));
    }

    // ==================== Display Mode ====================

    #[test]
    fn test_from_total_reconstructs_the_convention_split() {
        let incl = TaxSplit::from_total(dec!(121), dec!(21), true);
        assert_eq!(incl.net, dec!(100));
        assert_eq!(incl.gross(), dec!(121));

        let excl = TaxSplit::from_total(dec!(100), dec!(21), false);
        assert_eq!(excl.net, dec!(100));
        assert_eq!(excl.gross(), dec!(121));
    }

    #[test]
    fn test_display_modes_split_the_same_gross() {
        let split = TaxSplit::from_total(dec!(121), dec!(21), true);
        assert_eq!(split.display_amount(TaxDisplayMode::ExcludingTax), dec!(100));
        assert_eq!(split.display_amount(TaxDisplayMode::IncludingTax), dec!(121));
    }

    #[test]
    fn test_untaxed_split_reports_the_base_in_both_modes() {
        let split = TaxSplit::untaxed(dec!(100));
        for display in [TaxDisplayMode::ExcludingTax, TaxDisplayMode::IncludingTax] {
            assert_eq!(split.display_amount(display), dec!(100));
        }
    }

    // ==================== Per-Rate Aggregation ====================

    #[test]
    fn test_totals_aggregate_per_rate() {
        let mut bases = BTreeMap::new();
        bases.insert(dec!(10), dec!(200));
        bases.insert(dec!(21), dec!(100));
        let totals = compute_tax_totals(&bases, false);

        assert_eq!(totals.by_rate, vec![(dec!(10), dec!(20)), (dec!(21), dec!(21))]);
        assert_eq!(totals.total, dec!(41));
    }

    #[test]
    fn test_totals_skip_zero_rate_buckets() {
        let mut bases = BTreeMap::new();
        bases.insert(Decimal::ZERO, dec!(500));
        bases.insert(dec!(21), dec!(100));
        let totals = compute_tax_totals(&bases, false);

        assert_eq!(totals.by_rate.len(), 1);
        assert_eq!(totals.total, dec!(21));
    }

    #[test]
    fn test_totals_round_once_not_per_bucket() {
        // Three buckets whose individual taxes each carry sub-cent
        // parts; the sum keeps full precision for the caller to round
        // exactly once.
        let mut bases = BTreeMap::new();
        bases.insert(dec!(7), dec!(10.01));
        bases.insert(dec!(19), dec!(10.01));
        bases.insert(dec!(21), dec!(10.01));
        let totals = compute_tax_totals(&bases, false);

        let expected = dec!(10.01) * dec!(7) / dec!(100)
            + dec!(10.01) * dec!(19) / dec!(100)
            + dec!(10.01) * dec!(21) / dec!(100);
        assert_eq!(totals.total, expected);
    }
}
