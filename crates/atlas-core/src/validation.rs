//! # Validation
//!
//! Input validation rules for caller-supplied data.
//!
//! Checks run before any store mutation, so malformed input (negative
//! cash, empty names) is rejected with a typed [`ValidationError`]
//! instead of ever reaching a collection.

use crate::error::{CoreResult, ValidationError};
use crate::types::{NewCustomer, NewInvoice};

/// Maximum length for customer names.
pub const MAX_NAME_LEN: usize = 120;

/// Validates a cash amount (opening or closing count).
///
/// Zero is valid - an empty drawer is a real state. Negative is not.
pub fn validate_cash_amount(field: &str, cents: i64) -> CoreResult<()> {
    if cents < 0 {
        return Err(ValidationError::negative(field, cents));
    }
    Ok(())
}

/// Validates the caller-supplied fields for a new customer.
pub fn validate_new_customer(data: &NewCustomer) -> CoreResult<()> {
    if data.name.trim().is_empty() {
        return Err(ValidationError::required("name"));
    }
    if data.name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

/// Validates the caller-supplied fields for a sale.
///
/// ## Checks
/// - subtotal, discount and total must not be negative
/// - every line needs a positive quantity and non-negative unit price
///
/// An empty line list is accepted (walk-in charges post without lines).
pub fn validate_new_invoice(data: &NewInvoice) -> CoreResult<()> {
    validate_cash_amount("subtotal", data.subtotal_cents)?;
    validate_cash_amount("discount", data.discount_cents)?;
    validate_cash_amount("total", data.total_cents)?;

    for line in &data.lines {
        if line.quantity <= 0 {
            return Err(ValidationError::MustBePositive {
                field: format!("quantity ({})", line.product_id),
                value: line.quantity,
            });
        }
        validate_cash_amount("unitPrice", line.unit_price_cents)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InvoiceLine, PaymentMethod};

    fn sale_of(total_cents: i64) -> NewInvoice {
        NewInvoice {
            customer_id: None,
            customer_name: None,
            lines: vec![],
            subtotal_cents: total_cents,
            discount_cents: 0,
            total_cents,
            payment_method: PaymentMethod::Cash,
            status: None,
        }
    }

    #[test]
    fn test_cash_amount_zero_is_valid() {
        assert!(validate_cash_amount("openingCash", 0).is_ok());
        assert!(validate_cash_amount("openingCash", 1000).is_ok());
    }

    #[test]
    fn test_cash_amount_negative_rejected() {
        let err = validate_cash_amount("openingCash", -1).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAmount { .. }));
    }

    #[test]
    fn test_customer_name_required() {
        let err = validate_new_customer(&NewCustomer {
            name: "   ".to_string(),
            ..NewCustomer::default()
        })
        .unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));

        assert!(validate_new_customer(&NewCustomer {
            name: "Acme".to_string(),
            ..NewCustomer::default()
        })
        .is_ok());
    }

    #[test]
    fn test_invoice_negative_total_rejected() {
        let err = validate_new_invoice(&sale_of(-500)).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAmount { .. }));
    }

    #[test]
    fn test_invoice_line_quantity_must_be_positive() {
        let mut sale = sale_of(1000);
        sale.lines.push(InvoiceLine {
            product_id: "PRD-1".to_string(),
            name: "Haircut".to_string(),
            unit_price_cents: 1000,
            quantity: 0,
        });

        let err = validate_new_invoice(&sale).unwrap_err();
        assert!(matches!(err, ValidationError::MustBePositive { .. }));
    }

    #[test]
    fn test_invoice_without_lines_is_accepted() {
        assert!(validate_new_invoice(&sale_of(0)).is_ok());
    }
}
