//! Input validation at the engine boundary
//!
//! Malformed carts are rejected with a typed error before any pipeline
//! stage executes. Bounds keep a fat-fingered quantity or price from
//! flowing into totals.

use rust_decimal::Decimal;
use shared::checkout::{CheckoutCart, CustomerProfile, InputErrorCode, StoreSettings};

use crate::error::TotalError;

/// Maximum allowed unit price or charge (1,000,000 in store currency)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;

fn invalid(code: InputErrorCode, message: String) -> TotalError {
    TotalError::InvalidInput(code, message)
}

/// Validate that an amount is non-negative and within bounds.
fn require_amount_in_range(value: Decimal, field: &str) -> Result<(), TotalError> {
    if value < Decimal::ZERO {
        return Err(invalid(
            InputErrorCode::InvalidAmount,
            format!("{field} must be non-negative, got {value}"),
        ));
    }
    if value > MAX_AMOUNT {
        return Err(invalid(
            InputErrorCode::InvalidAmount,
            format!("{field} exceeds maximum allowed ({MAX_AMOUNT}), got {value}"),
        ));
    }
    Ok(())
}

/// Validate a cart snapshot, customer profile and settings combination
/// before the pipeline runs.
pub fn validate_inputs(
    cart: &CheckoutCart,
    customer: &CustomerProfile,
    settings: &StoreSettings,
) -> Result<(), TotalError> {
    if cart.currency != settings.currency.code {
        return Err(invalid(
            InputErrorCode::UnknownCurrency,
            format!(
                "cart currency '{}' does not match store currency '{}'",
                cart.currency, settings.currency.code
            ),
        ));
    }

    require_amount_in_range(cart.shipping_rate, "shipping rate")?;

    for line in &cart.lines {
        if line.quantity <= 0 {
            return Err(invalid(
                InputErrorCode::InvalidQuantity,
                format!(
                    "quantity must be positive, got {} for product '{}'",
                    line.quantity, line.product_id
                ),
            ));
        }
        if line.quantity > MAX_QUANTITY {
            return Err(invalid(
                InputErrorCode::InvalidQuantity,
                format!(
                    "quantity exceeds maximum allowed ({}), got {} for product '{}'",
                    MAX_QUANTITY, line.quantity, line.product_id
                ),
            ));
        }
        require_amount_in_range(line.unit_price, "unit price")?;
        require_amount_in_range(line.additional_shipping_charge, "additional shipping charge")?;
    }

    if let Some(points) = cart.redeem_points {
        if points <= 0 {
            return Err(invalid(
                InputErrorCode::InvalidPoints,
                format!("redeem request must be positive, got {points}"),
            ));
        }
        if points > customer.loyalty_points_balance {
            return Err(invalid(
                InputErrorCode::InvalidPoints,
                format!(
                    "redeem request ({points}) exceeds balance ({})",
                    customer.loyalty_points_balance
                ),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shared::checkout::CartLine;
    use shared::money::Currency;

    fn cart(lines: Vec<CartLine>) -> CheckoutCart {
        CheckoutCart {
            lines,
            currency: "EUR".to_string(),
            shipping_rate: Decimal::ZERO,
            redeem_points: None,
        }
    }

    fn line() -> CartLine {
        CartLine {
            product_id: "p1".to_string(),
            unit_price: dec!(10),
            quantity: 1,
            is_ship_enabled: true,
            is_free_shipping: false,
            additional_shipping_charge: Decimal::ZERO,
            tax_category: "standard".to_string(),
        }
    }

    fn customer() -> CustomerProfile {
        CustomerProfile {
            id: "c1".to_string(),
            is_tax_exempt: false,
            group_ids: vec![],
            loyalty_points_balance: 100,
        }
    }

    fn settings() -> StoreSettings {
        StoreSettings::with_currency(Currency::standard("EUR"))
    }

    fn code(err: TotalError) -> InputErrorCode {
        match err {
            TotalError::InvalidInput(code, _) => code,
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_cart_passes() {
        assert!(validate_inputs(&cart(vec![line()]), &customer(), &settings()).is_ok());
    }

    #[test]
    fn test_empty_cart_is_valid() {
        assert!(validate_inputs(&cart(vec![]), &customer(), &settings()).is_ok());
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut bad = cart(vec![line()]);
        bad.currency = "USD".to_string();
        let err = validate_inputs(&bad, &customer(), &settings()).unwrap_err();
        assert_eq!(code(err), InputErrorCode::UnknownCurrency);
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        for quantity in [0, -3] {
            let mut bad_line = line();
            bad_line.quantity = quantity;
            let err = validate_inputs(&cart(vec![bad_line]), &customer(), &settings()).unwrap_err();
            assert_eq!(code(err), InputErrorCode::InvalidQuantity);
        }
    }

    #[test]
    fn test_over_limit_quantity_rejected() {
        let mut bad_line = line();
        bad_line.quantity = MAX_QUANTITY + 1;
        let err = validate_inputs(&cart(vec![bad_line]), &customer(), &settings()).unwrap_err();
        assert_eq!(code(err), InputErrorCode::InvalidQuantity);
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut bad_line = line();
        bad_line.unit_price = dec!(-0.01);
        let err = validate_inputs(&cart(vec![bad_line]), &customer(), &settings()).unwrap_err();
        assert_eq!(code(err), InputErrorCode::InvalidAmount);
    }

    #[test]
    fn test_over_limit_price_rejected() {
        let mut bad_line = line();
        bad_line.unit_price = MAX_AMOUNT + dec!(0.01);
        let err = validate_inputs(&cart(vec![bad_line]), &customer(), &settings()).unwrap_err();
        assert_eq!(code(err), InputErrorCode::InvalidAmount);
    }

    #[test]
    fn test_negative_surcharge_rejected() {
        let mut bad_line = line();
        bad_line.additional_shipping_charge = dec!(-1);
        let err = validate_inputs(&cart(vec![bad_line]), &customer(), &settings()).unwrap_err();
        assert_eq!(code(err), InputErrorCode::InvalidAmount);
    }

    #[test]
    fn test_negative_shipping_rate_rejected() {
        let mut bad = cart(vec![line()]);
        bad.shipping_rate = dec!(-1);
        let err = validate_inputs(&bad, &customer(), &settings()).unwrap_err();
        assert_eq!(code(err), InputErrorCode::InvalidAmount);
    }

    #[test]
    fn test_redeem_request_bounds() {
        let mut bad = cart(vec![line()]);
        bad.redeem_points = Some(0);
        let err = validate_inputs(&bad, &customer(), &settings()).unwrap_err();
        assert_eq!(code(err), InputErrorCode::InvalidPoints);

        let mut over = cart(vec![line()]);
        over.redeem_points = Some(101);
        let err = validate_inputs(&over, &customer(), &settings()).unwrap_err();
        assert_eq!(code(err), InputErrorCode::InvalidPoints);

        let mut ok = cart(vec![line()]);
        ok.redeem_points = Some(100);
        assert!(validate_inputs(&ok, &customer(), &settings()).is_ok());
    }
}
