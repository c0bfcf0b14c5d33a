//! Services module for invoicing-engine.

pub mod editor;
pub mod numbering;
pub mod totals;

pub use editor::InvoiceEditor;
pub use numbering::{compose_invoice_number, InvoiceSequence};
pub use totals::{
    compute_totals, format_money, line_amount, parse_decimal_or_zero, round_money, round_quantity,
    InvoiceTotals,
};
