//! Invoice model for invoicing-engine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::line_item::LineItem;

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Issued,
    Void,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Issued => "issued",
            InvoiceStatus::Void => "void",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "issued" => InvoiceStatus::Issued,
            "void" => InvoiceStatus::Void,
            _ => InvoiceStatus::Draft,
        }
    }
}

/// Invoice record edited by the screens and handed whole to the backend.
///
/// `net_total`, `tax_amount`, and `total_amount` are derived state, refreshed
/// by the editor after every mutation of a line item or of the tax rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: Uuid,
    pub invoice_number: Option<String>,
    pub status: InvoiceStatus,
    pub school_name: String,
    pub route_number: String,
    pub service_month: u32,
    pub service_year: i32,
    pub line_items: Vec<LineItem>,
    /// Tax rate as a percentage (20 means 20%).
    pub tax_rate: Decimal,
    pub net_total: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    pub notes: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub created_utc: DateTime<Utc>,
    pub issued_utc: Option<DateTime<Utc>>,
    pub voided_utc: Option<DateTime<Utc>>,
}

/// Input for creating a draft invoice.
#[derive(Debug, Clone)]
pub struct CreateInvoice {
    pub school_name: String,
    pub route_number: String,
    pub service_month: u32,
    pub service_year: i32,
    pub tax_rate: Decimal,
    pub notes: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

impl Invoice {
    /// Create an empty draft with all-zero totals and no number assigned.
    pub fn new_draft(input: CreateInvoice) -> Self {
        Self {
            invoice_id: Uuid::new_v4(),
            invoice_number: None,
            status: InvoiceStatus::Draft,
            school_name: input.school_name,
            route_number: input.route_number,
            service_month: input.service_month,
            service_year: input.service_year,
            line_items: Vec::new(),
            tax_rate: input.tax_rate,
            net_total: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            total_amount: Decimal::ZERO,
            notes: input.notes,
            metadata: input.metadata,
            created_utc: Utc::now(),
            issued_utc: None,
            voided_utc: None,
        }
    }

    /// Component parts of this invoice's display number.
    ///
    /// Month and year are zero-padded to two digits; the sequence part is
    /// supplied by the caller's sequence.
    pub fn number_parts(&self, sequence_number: String) -> InvoiceNumberParts {
        InvoiceNumberParts {
            route_number: self.route_number.clone(),
            month: format!("{:02}", self.service_month),
            short_year: format!("{:02}", self.service_year.rem_euclid(100)),
            sequence_number,
        }
    }
}

/// Component parts of a display invoice number.
///
/// Every part is required, so the composer never has to guard against an
/// absent component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceNumberParts {
    pub route_number: String,
    pub month: String,
    pub short_year: String,
    pub sequence_number: String,
}
