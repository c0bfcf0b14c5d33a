//! Invoice numbering tests for invoicing-engine.

use invoicing_engine::{compose_invoice_number, EngineError, InvoiceNumberParts, InvoiceSequence};

/// Helper to build a full set of number parts.
fn parts() -> InvoiceNumberParts {
    InvoiceNumberParts {
        route_number: "12".to_string(),
        month: "03".to_string(),
        short_year: "24".to_string(),
        sequence_number: "007".to_string(),
    }
}

#[test]
fn composes_fixed_format_number() {
    assert_eq!(compose_invoice_number(&parts()), "route12_03_24_007");
}

#[test]
fn part_contents_are_not_validated() {
    let parts = InvoiceNumberParts {
        route_number: String::new(),
        month: "13".to_string(),
        short_year: "2024".to_string(),
        sequence_number: "7".to_string(),
    };

    assert_eq!(compose_invoice_number(&parts), "route_13_2024_7");
}

#[test]
fn sequence_issues_in_order() {
    let mut sequence = InvoiceSequence::new(2024);

    assert_eq!(sequence.next_number(), "001");
    assert_eq!(sequence.next_number(), "002");
    assert_eq!(sequence.next_number(), "003");
    assert_eq!(sequence.year(), 2024);
}

#[test]
fn peek_does_not_consume() {
    let mut sequence = InvoiceSequence::new(2024);

    assert_eq!(sequence.peek(), "001");
    assert_eq!(sequence.peek(), "001");
    assert_eq!(sequence.next_number(), "001");
    assert_eq!(sequence.peek(), "002");
}

#[test]
fn starting_at_continues_a_persisted_counter() {
    let mut sequence = InvoiceSequence::starting_at(2024, 42);

    assert_eq!(sequence.next_number(), "042");
    assert_eq!(sequence.next_raw(), 43);
}

#[test]
fn wide_sequence_numbers_are_not_truncated() {
    let mut sequence = InvoiceSequence::starting_at(2024, 1234);

    assert_eq!(sequence.next_number(), "1234");
}

#[test]
fn advance_year_resets_counter() {
    let mut sequence = InvoiceSequence::new(2024);
    sequence.next_number();
    sequence.next_number();

    sequence.advance_year(2025).expect("Failed to advance year");

    assert_eq!(sequence.year(), 2025);
    assert_eq!(sequence.next_number(), "001");
}

#[test]
fn advance_year_rejects_non_future_years() {
    let mut sequence = InvoiceSequence::new(2024);

    let err = sequence
        .advance_year(2024)
        .expect_err("Same year should be rejected");
    assert!(matches!(err, EngineError::Numbering(_)));
    assert!(sequence.advance_year(2023).is_err());

    // Counter untouched by the rejected advances
    assert_eq!(sequence.next_raw(), 1);
}
