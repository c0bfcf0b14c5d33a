//! Invoice number composition and sequencing.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::InvoiceNumberParts;

/// Width the sequence part is zero-padded to ("007").
const SEQUENCE_WIDTH: usize = 3;

/// Compose the display invoice number from its component parts.
///
/// Pure string template; part contents are not validated.
pub fn compose_invoice_number(parts: &InvoiceNumberParts) -> String {
    format!(
        "route{}_{}_{}_{}",
        parts.route_number, parts.month, parts.short_year, parts.sequence_number
    )
}

/// Injectable invoice-number sequence.
///
/// Owned by the caller and passed into [`InvoiceEditor::issue`] explicitly;
/// replaces the window-global counter the legacy screens shared. Serializes
/// so the caller can persist the counter position with its own state.
///
/// [`InvoiceEditor::issue`]: crate::services::editor::InvoiceEditor::issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceSequence {
    year: i32,
    next_number: u64,
}

impl InvoiceSequence {
    /// Create a new sequence for a year, starting at 1.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            next_number: 1,
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(year: i32, next_number: u64) -> Self {
        Self { year, next_number }
    }

    /// Draw the next sequence part and advance the counter.
    ///
    /// Numbers wider than the pad width are not truncated.
    pub fn next_number(&mut self) -> String {
        let num = self.next_number;
        self.next_number += 1;
        format!("{:0width$}", num, width = SEQUENCE_WIDTH)
    }

    /// Preview the next sequence part without consuming it.
    pub fn peek(&self) -> String {
        format!("{:0width$}", self.next_number, width = SEQUENCE_WIDTH)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The next number that will be issued, unformatted.
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Advance to a new year, resetting the counter to 1.
    pub fn advance_year(&mut self, new_year: i32) -> Result<(), EngineError> {
        if new_year <= self.year {
            return Err(EngineError::Numbering(format!(
                "new year {new_year} must be greater than current year {}",
                self.year
            )));
        }
        self.year = new_year;
        self.next_number = 1;
        Ok(())
    }
}
