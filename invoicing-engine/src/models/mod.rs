//! Domain models for invoicing-engine.

mod invoice;
mod line_item;
mod schedule;

pub use invoice::{CreateInvoice, Invoice, InvoiceNumberParts, InvoiceStatus};
pub use line_item::{CreateLineItem, LineItem};
pub use schedule::HolidayCalendar;
