use thiserror::Error;

/// Errors surfaced by the invoice editing engine.
///
/// Malformed numeric field input is not an error: raw quantity, price, and
/// tax-rate text coerces to zero at the parse boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invoice not editable: {0}")]
    NotEditable(anyhow::Error),

    #[error("Line item index {0} out of range")]
    LineItemOutOfRange(usize),

    #[error("Numbering error: {0}")]
    Numbering(String),
}
