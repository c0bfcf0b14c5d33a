//! invoicing-engine: invoice totals and editing core for school-transport billing.
//!
//! The engine keeps a draft invoice's derived totals consistent under field
//! edits, composes display invoice numbers from an injectable sequence, and
//! tracks the holiday calendar used to count billable service days. It
//! performs no I/O; the finished invoice record serializes for hand-off to
//! the external backend.

pub mod error;
pub mod models;
pub mod services;

pub use error::EngineError;
pub use models::{
    CreateInvoice, CreateLineItem, HolidayCalendar, Invoice, InvoiceNumberParts, InvoiceStatus,
    LineItem,
};
pub use services::{
    compose_invoice_number, compute_totals, format_money, line_amount, parse_decimal_or_zero,
    InvoiceEditor, InvoiceSequence, InvoiceTotals,
};
