//! Opt-in validation for line items and totals options.
//!
//! The totals engine never calls these functions; callers that want to reject
//! bad input run them before computing or committing a document.

use rust_decimal::Decimal;

use super::error::ValidationError;
use super::types::*;

/// Validate every line. Returns all errors found (not just the first).
pub fn validate_line_items(items: &[LineItem]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, line) in items.iter().enumerate() {
        validate_line(line, i, &mut errors);
    }
    errors
}

/// Validate the global discount of a document.
pub fn validate_options(options: &TotalsOptions) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    check_percent(
        options.global_discount_percent,
        "options.global_discount_percent",
        "global discount",
        "DOC-DISCOUNT",
        &mut errors,
    );
    errors
}

fn validate_line(line: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("lines[{index}]");

    if line.designation.trim().is_empty() {
        errors.push(ValidationError::new(
            "LINE-NAME",
            format!("{prefix}.designation"),
            "designation must not be empty",
        ));
    }

    if line.quantity <= Decimal::ZERO {
        errors.push(ValidationError::new(
            "LINE-QTY",
            format!("{prefix}.quantity"),
            format!("quantity must be positive, got {}", line.quantity),
        ));
    }

    if line.unit_price < Decimal::ZERO {
        errors.push(ValidationError::new(
            "LINE-PRICE",
            format!("{prefix}.unit_price"),
            format!("unit price must not be negative, got {}", line.unit_price),
        ));
    }

    check_percent(
        line.vat_rate,
        &format!("{prefix}.vat_rate"),
        "TVA rate",
        "LINE-VAT",
        errors,
    );
    check_percent(
        line.discount_percent,
        &format!("{prefix}.discount_percent"),
        "discount",
        "LINE-DISCOUNT",
        errors,
    );
}

fn check_percent(
    value: Decimal,
    field: &str,
    what: &str,
    rule: &'static str,
    errors: &mut Vec<ValidationError>,
) {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        errors.push(ValidationError::new(
            rule,
            field,
            format!("{what} must be between 0 and 100, got {value}"),
        ));
    }
}
