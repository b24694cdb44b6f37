//! Order total orchestration
//!
//! Sequences the calculation pipeline:
//!
//! subtotal → discounts → shipping → tax → loyalty points → grand total
//!
//! Each stage's output is the next stage's input, so the pipeline is
//! inherently sequential per calculation; independent calculations are
//! fully parallel (no shared state, no I/O). Collaborators are resolved
//! once up front, and a resolver failure aborts the whole calculation:
//! a partially computed total is never returned.
//!
//! Intermediate sums are never rounded; only the reported figures go
//! through the rounding engine, exactly once each, at finalization.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::checkout::{
    CheckoutCart, CustomerProfile, DiscountAmount, DiscountValue, GroupShippingRate, LineTotal,
    OrderTotalResult, StoreSettings, TaxLine, TotalWarning,
};
use shared::money::Money;
use tracing::{debug, warn};

use crate::error::{ResolverError, TotalError};
use crate::money::round_currency;
use crate::validation::validate_inputs;

use super::discounts::{aggregate, partition_by_scope};
use super::points::{amount_to_points, meets_minimum_usage, points_to_amount};
use super::resolvers::{DiscountResolver, TaxRateResolver};
use super::shipping::compute_shipping;
use super::tax::{compute_tax_totals, split_tax, TaxSplit};

/// Sanity-check resolver output before it enters the pipeline. Bad data
/// from a collaborator is a collaborator failure, not an input error.
fn validate_resolved_discounts(discounts: &[DiscountAmount]) -> Result<(), ResolverError> {
    for discount in discounts {
        let negative = match discount.value {
            DiscountValue::Amount(amount) => amount < Decimal::ZERO,
            DiscountValue::Percent(percent) => percent < Decimal::ZERO,
        };
        if negative {
            return Err(ResolverError::Discount(format!(
                "discount '{}' has a negative value",
                discount.id
            )));
        }
    }
    Ok(())
}

fn resolve_rate(
    tax_rates: &dyn TaxRateResolver,
    tax_category: &str,
    customer: &CustomerProfile,
) -> Result<Decimal, TotalError> {
    let rate = tax_rates.resolve(tax_category, customer)?;
    if rate < Decimal::ZERO {
        return Err(ResolverError::TaxRate(format!(
            "negative rate {rate} for category '{tax_category}'"
        ))
        .into());
    }
    Ok(rate)
}

/// Compute the itemized order total for a cart snapshot.
///
/// The sole entry point for callers. Collaborator data (tax rates,
/// applicable discounts, group shipping terms) is resolved before the
/// pure pipeline runs; the engine itself performs no I/O and holds no
/// state between calls.
pub fn compute_order_total(
    cart: &CheckoutCart,
    customer: &CustomerProfile,
    settings: &StoreSettings,
    tax_rates: &dyn TaxRateResolver,
    discounts: &dyn DiscountResolver,
    group_rates: &BTreeMap<String, GroupShippingRate>,
) -> Result<OrderTotalResult, TotalError> {
    validate_inputs(cart, customer, settings)?;

    let currency = &settings.currency;
    let incl = settings.prices_include_tax;

    // Resolve collaborators once; everything after this block is pure.
    let resolved = discounts.resolve(cart, customer)?;
    validate_resolved_discounts(&resolved)?;
    let (subtotal_discounts, shipping_discounts, total_discounts) = partition_by_scope(resolved);

    let taxes_apply = settings.tax_enabled && !customer.is_tax_exempt;
    let mut category_rates: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut shipping_tax_rate: Option<Decimal> = None;
    if taxes_apply {
        for line in &cart.lines {
            if !category_rates.contains_key(&line.tax_category) {
                let rate = resolve_rate(tax_rates, &line.tax_category, customer)?;
                category_rates.insert(line.tax_category.clone(), rate);
            }
        }
        if settings.shipping_is_taxable {
            match &settings.shipping_tax_category {
                Some(category) => {
                    let rate = match category_rates.get(category) {
                        Some(rate) => *rate,
                        None => resolve_rate(tax_rates, category, customer)?,
                    };
                    shipping_tax_rate = Some(rate);
                }
                None => warn!(
                    "shipping marked taxable but no shipping tax category is configured; \
                     shipping stays untaxed"
                ),
            }
        }
    }

    // Subtotal: entered amounts, unrounded
    let mut subtotal = Decimal::ZERO;
    let mut line_amounts: Vec<Decimal> = Vec::with_capacity(cart.lines.len());
    for line in &cart.lines {
        let amount = line.unit_price * Decimal::from(line.quantity);
        line_amounts.push(amount);
        subtotal += amount;
    }

    // Subtotal-scoped discounts, against the original subtotal
    let sub_discount = aggregate(
        subtotal,
        &subtotal_discounts,
        settings.discount_mode,
        currency,
    );
    let discounted_subtotal = (subtotal - sub_discount.amount).max(Decimal::ZERO);
    debug!(%subtotal, discount = %sub_discount.amount, "subtotal stage done");

    // Shipping
    let shipping = compute_shipping(
        &cart.lines,
        cart.shipping_rate,
        customer,
        group_rates,
        &shipping_discounts,
        discounted_subtotal,
        settings,
    );
    debug!(amount = %shipping.amount, free = shipping.is_free, "shipping stage done");

    // Tax: per-rate buckets over entered line amounts, with the
    // subtotal discount spread proportionally across buckets
    let mut pre_bases: BTreeMap<Decimal, Decimal> = BTreeMap::new();
    let mut post_bases: BTreeMap<Decimal, Decimal> = BTreeMap::new();
    if taxes_apply && subtotal > Decimal::ZERO {
        let keep_ratio = discounted_subtotal / subtotal;
        for (line, amount) in cart.lines.iter().zip(&line_amounts) {
            let rate = category_rates[&line.tax_category];
            *pre_bases.entry(rate).or_default() += *amount;
            *post_bases.entry(rate).or_default() += *amount * keep_ratio;
        }
    }
    let pre_tax = compute_tax_totals(&pre_bases, incl);
    let post_tax = compute_tax_totals(&post_bases, incl);

    let shipping_split = match shipping_tax_rate {
        Some(rate) if !shipping.is_free => split_tax(shipping.amount, rate, incl),
        _ => TaxSplit::untaxed(shipping.amount),
    };
    let tax_total = post_tax.total + shipping_split.tax;

    let mut tax_by_rate: BTreeMap<Decimal, Decimal> = post_tax.by_rate.into_iter().collect();
    if let Some(rate) = shipping_tax_rate {
        if shipping_split.tax > Decimal::ZERO {
            *tax_by_rate.entry(rate).or_default() += shipping_split.tax;
        }
    }

    // Net and gross views of every figure; the grand total is assembled
    // from gross amounts and never reads the display mode, which is
    // what keeps it display-mode independent.
    let subtotal_split = TaxSplit::from_total(subtotal, pre_tax.total, incl);
    let discounted_split = TaxSplit::from_total(discounted_subtotal, post_tax.total, incl);

    let grand_before_adjustments = discounted_split.gross() + shipping_split.gross();

    // Total-scoped discounts net against the post-tax total
    let order_discount = aggregate(
        grand_before_adjustments,
        &total_discounts,
        settings.discount_mode,
        currency,
    );
    let after_order_discount =
        (grand_before_adjustments - order_discount.amount).max(Decimal::ZERO);

    // Loyalty points: the minimum-usage gate runs before netting; a
    // rejected request leaves the total untouched and warns the caller
    let mut warnings = vec![];
    let mut redeemed_points = 0i64;
    let mut redeemed_amount = Decimal::ZERO;
    if let Some(requested) = cart.redeem_points {
        if !meets_minimum_usage(requested, settings.minimum_points_to_use) {
            warn!(
                requested,
                minimum = settings.minimum_points_to_use,
                "point redemption below store minimum, total computed without redemption"
            );
            warnings.push(TotalWarning::InsufficientPoints {
                requested,
                minimum: settings.minimum_points_to_use,
            });
        } else {
            let quote = points_to_amount(requested, settings.points_exchange_rate, currency);
            // A non-positive exchange rate quotes zero: nothing to net,
            // no points charged
            if !quote.amount.is_zero() {
                if quote.amount >= after_order_discount {
                    // Cap at the remaining total and charge only the
                    // points that cover it
                    redeemed_amount = after_order_discount;
                    redeemed_points =
                        amount_to_points(after_order_discount, settings.points_exchange_rate);
                } else {
                    redeemed_amount = quote.amount;
                    redeemed_points = requested;
                }
            }
        }
    }
    let grand_total = (after_order_discount - redeemed_amount).max(Decimal::ZERO);

    // Finalize: pick display figures, round every reported field once
    let display = settings.tax_display;
    let money = |amount: Decimal| Money::new(round_currency(amount, currency), currency.code.clone());

    let subtotal_figure = subtotal_split.display_amount(display);
    let discounted_figure = discounted_split.display_amount(display);
    let discount_figure = (subtotal_figure - discounted_figure).max(Decimal::ZERO);

    let tax_breakdown: Vec<TaxLine> = tax_by_rate
        .into_iter()
        .map(|(rate, tax)| TaxLine {
            rate,
            amount: money(tax),
        })
        .collect();

    let line_totals: Vec<LineTotal> = cart
        .lines
        .iter()
        .zip(&line_amounts)
        .map(|(line, amount)| LineTotal {
            product_id: line.product_id.clone(),
            line_total: money(*amount),
        })
        .collect();

    Ok(OrderTotalResult {
        subtotal: money(subtotal_figure),
        discount_total: money(discount_figure),
        subtotal_with_discount: money(discounted_figure),
        shipping_total: money(shipping_split.display_amount(display)),
        order_discount_total: money(order_discount.amount),
        tax_total: money(tax_total),
        tax_breakdown,
        redeemed_points,
        redeemed_points_amount: money(redeemed_amount),
        grand_total: money(grand_total),
        line_totals,
        warnings,
    })
}
