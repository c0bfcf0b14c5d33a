//! Edit handlers for the invoice screens.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{CreateLineItem, Invoice, InvoiceStatus, LineItem};
use crate::services::numbering::{compose_invoice_number, InvoiceSequence};
use crate::services::totals::{
    compute_totals, line_amount, parse_decimal_or_zero, round_money, round_quantity,
};

/// Applies field edits to a draft invoice, keeping derived totals consistent.
///
/// Every mutation recomputes synchronously before returning, so sequential
/// edits always observe totals that match the latest state of all rows.
pub struct InvoiceEditor<'a> {
    invoice: &'a mut Invoice,
}

impl<'a> InvoiceEditor<'a> {
    pub fn new(invoice: &'a mut Invoice) -> Self {
        Self { invoice }
    }

    /// The invoice being edited.
    pub fn invoice(&self) -> &Invoice {
        self.invoice
    }

    /// Apply a raw quantity field edit to a row and refresh totals.
    ///
    /// Unparsable input coerces to zero; the quantity is rounded to 1 decimal
    /// and the row amount re-derived before totals are recomputed.
    #[instrument(skip(self), fields(invoice_id = %self.invoice.invoice_id))]
    pub fn set_quantity(&mut self, index: usize, raw: &str) -> Result<(), EngineError> {
        self.ensure_draft()?;
        let quantity = round_quantity(parse_decimal_or_zero(raw));

        let item = self.line_item_mut(index)?;
        item.quantity = quantity;
        item.amount = line_amount(item.quantity, item.unit_price);

        self.refresh_totals();
        Ok(())
    }

    /// Apply a raw unit-price field edit to a row and refresh totals.
    #[instrument(skip(self), fields(invoice_id = %self.invoice.invoice_id))]
    pub fn set_unit_price(&mut self, index: usize, raw: &str) -> Result<(), EngineError> {
        self.ensure_draft()?;
        let unit_price = round_money(parse_decimal_or_zero(raw));

        let item = self.line_item_mut(index)?;
        item.unit_price = unit_price;
        item.amount = line_amount(item.quantity, item.unit_price);

        self.refresh_totals();
        Ok(())
    }

    /// Apply a raw tax-rate field edit.
    ///
    /// Recomputes tax and total from the existing net total; row amounts are
    /// untouched and the items are not re-summed.
    #[instrument(skip(self), fields(invoice_id = %self.invoice.invoice_id))]
    pub fn set_tax_rate(&mut self, raw: &str) -> Result<(), EngineError> {
        self.ensure_draft()?;
        let rate = parse_decimal_or_zero(raw);

        self.invoice.tax_rate = rate;
        self.invoice.tax_amount =
            round_money(self.invoice.net_total * rate / Decimal::ONE_HUNDRED);
        self.invoice.total_amount =
            round_money(self.invoice.net_total + self.invoice.tax_amount);

        debug!(tax_rate = %rate, tax_amount = %self.invoice.tax_amount, "Tax rate applied");
        Ok(())
    }

    /// Append a row, deriving its amount, and refresh totals.
    #[instrument(skip(self, input), fields(invoice_id = %self.invoice.invoice_id))]
    pub fn add_line_item(&mut self, input: CreateLineItem) -> Result<&LineItem, EngineError> {
        self.ensure_draft()?;

        let quantity = round_quantity(input.quantity);
        let unit_price = round_money(input.unit_price);
        let item = LineItem {
            line_item_id: Uuid::new_v4(),
            description: input.description,
            quantity,
            unit_price,
            amount: line_amount(quantity, unit_price),
            sort_order: input.sort_order,
            created_utc: Utc::now(),
        };
        info!(line_item_id = %item.line_item_id, "Line item added");

        let index = self.invoice.line_items.len();
        self.invoice.line_items.push(item);
        self.refresh_totals();
        Ok(&self.invoice.line_items[index])
    }

    /// Remove a row and refresh totals.
    #[instrument(skip(self), fields(invoice_id = %self.invoice.invoice_id))]
    pub fn remove_line_item(&mut self, index: usize) -> Result<LineItem, EngineError> {
        self.ensure_draft()?;
        if index >= self.invoice.line_items.len() {
            return Err(EngineError::LineItemOutOfRange(index));
        }

        let removed = self.invoice.line_items.remove(index);
        info!(line_item_id = %removed.line_item_id, "Line item removed");

        self.refresh_totals();
        Ok(removed)
    }

    /// Issue the draft: assign its display number from the sequence and stamp
    /// the transition.
    #[instrument(skip(self, sequence), fields(invoice_id = %self.invoice.invoice_id))]
    pub fn issue(&mut self, sequence: &mut InvoiceSequence) -> Result<String, EngineError> {
        self.ensure_draft()?;

        let parts = self.invoice.number_parts(sequence.next_number());
        let number = compose_invoice_number(&parts);
        info!(invoice_number = %number, "Invoice issued");

        self.invoice.invoice_number = Some(number.clone());
        self.invoice.status = InvoiceStatus::Issued;
        self.invoice.issued_utc = Some(Utc::now());
        Ok(number)
    }

    /// Void an issued invoice. Drafts are deleted by the screens, not voided.
    #[instrument(skip(self), fields(invoice_id = %self.invoice.invoice_id))]
    pub fn void(&mut self) -> Result<(), EngineError> {
        if self.invoice.status != InvoiceStatus::Issued {
            return Err(EngineError::NotEditable(anyhow::anyhow!(
                "only issued invoices can be voided, invoice is {}",
                self.invoice.status.as_str()
            )));
        }

        self.invoice.status = InvoiceStatus::Void;
        self.invoice.voided_utc = Some(Utc::now());
        info!("Invoice voided");
        Ok(())
    }

    fn ensure_draft(&self) -> Result<(), EngineError> {
        if self.invoice.status != InvoiceStatus::Draft {
            return Err(EngineError::NotEditable(anyhow::anyhow!(
                "invoice is {}",
                self.invoice.status.as_str()
            )));
        }
        Ok(())
    }

    fn line_item_mut(&mut self, index: usize) -> Result<&mut LineItem, EngineError> {
        self.invoice
            .line_items
            .get_mut(index)
            .ok_or(EngineError::LineItemOutOfRange(index))
    }

    fn refresh_totals(&mut self) {
        let totals = compute_totals(&self.invoice.line_items, self.invoice.tax_rate);
        self.invoice.net_total = totals.net_total;
        self.invoice.tax_amount = totals.tax_amount;
        self.invoice.total_amount = totals.total_amount;

        debug!(
            net_total = %totals.net_total,
            tax_amount = %totals.tax_amount,
            total_amount = %totals.total_amount,
            "Totals recomputed"
        );
    }
}
