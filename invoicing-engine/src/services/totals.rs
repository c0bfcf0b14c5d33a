//! Totals calculator and numeric policy for invoice editing.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::LineItem;

/// Derived invoice totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub net_total: Decimal,
    /// Tax rate as a percentage (20 means 20%).
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
}

/// Round a monetary value to 2 decimal places, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a quantity to 1 decimal place, half away from zero.
pub fn round_quantity(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Row amount for a quantity at a unit price.
pub fn line_amount(quantity: Decimal, unit_price: Decimal) -> Decimal {
    round_money(quantity * unit_price)
}

/// Parse raw field input as a decimal, coercing unparsable input to zero.
///
/// Input sanitization policy of the editing screens: empty or non-numeric
/// field text becomes 0 rather than an error.
pub fn parse_decimal_or_zero(raw: &str) -> Decimal {
    Decimal::from_str(raw.trim()).unwrap_or(Decimal::ZERO)
}

/// Format a monetary value with two fractional digits for display.
pub fn format_money(value: &Decimal) -> String {
    format!("{:.2}", round_money(*value))
}

/// Compute invoice totals from line items and a percentage tax rate.
///
/// Pure and infallible: an empty item list yields all-zero totals, and
/// negative quantities or prices propagate unclamped (credit rows).
pub fn compute_totals(items: &[LineItem], tax_rate: Decimal) -> InvoiceTotals {
    let net_total = round_money(items.iter().map(|item| item.amount).sum());
    let tax_amount = round_money(net_total * tax_rate / Decimal::ONE_HUNDRED);
    let total_amount = round_money(net_total + tax_amount);

    InvoiceTotals {
        net_total,
        tax_rate,
        tax_amount,
        total_amount,
    }
}
