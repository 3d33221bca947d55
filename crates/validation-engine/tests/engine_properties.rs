//! Property-based tests for the validation engine
//!
//! Verifies the engine's structural guarantees over generated inputs:
//! verbatim label/value pairs always validate, report shape follows the
//! invoked field tables, and validation is idempotent.

use proptest::prelude::*;

use quote_types::Section;
use validation_engine::sections::{INSURANT_FIELDS, PRODUCT_FIELDS, VEHICLE_FIELDS};
use validation_engine::{Fixture, QuoteValidator};

/// Digit-only values cannot collide with the alphabetic field labels, so a
/// text built from verbatim label/value lines must validate cleanly.
fn digit_value() -> impl Strategy<Value = String> {
    "[0-9]{1,8}"
}

/// Arbitrary printable fixture values (idempotence holds for any input).
fn any_value() -> impl Strategy<Value = String> {
    "[ -~]{0,20}"
}

fn section_choice() -> impl Strategy<Value = Vec<Section>> {
    prop_oneof![
        Just(vec![Section::Insurant]),
        Just(vec![Section::Vehicle]),
        Just(vec![Section::Product]),
        Just(vec![Section::Insurant, Section::Vehicle]),
        Just(vec![Section::Insurant, Section::Vehicle, Section::Product]),
    ]
}

fn table_len(section: Section) -> usize {
    match section {
        Section::Insurant => INSURANT_FIELDS.len(),
        Section::Vehicle => VEHICLE_FIELDS.len(),
        Section::Product => PRODUCT_FIELDS.len(),
        Section::Pricing => 1,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn verbatim_insurant_fields_always_validate(
        values in proptest::collection::vec(digit_value(), INSURANT_FIELDS.len())
    ) {
        let mut fixture = Fixture::new();
        let mut lines = Vec::new();
        for (field, value) in INSURANT_FIELDS.iter().zip(&values) {
            fixture.insert(field.fixture_key, value.clone());
            lines.push(format!("{}: {}", field.source_label, value));
        }
        let text = lines.join("\n");

        let report = QuoteValidator::new()
            .validate_sections(&text, &fixture, &[Section::Insurant], None)
            .unwrap();

        prop_assert!(report.is_valid, "report: {:?}", report.results);
    }

    #[test]
    fn report_length_and_order_follow_field_tables(
        sections in section_choice(),
        value in digit_value()
    ) {
        let mut fixture = Fixture::new();
        fixture.insert("firstname", value);

        let report = QuoteValidator::new()
            .validate_sections("", &fixture, &sections, None)
            .unwrap();

        let expected_len: usize = sections.iter().copied().map(table_len).sum();
        prop_assert_eq!(report.results.len(), expected_len);

        // First line always belongs to the first invoked table
        if let Some(first) = sections.first() {
            let leading_field = match first {
                Section::Insurant => "First Name",
                Section::Vehicle => "Make",
                Section::Product => "Insurance Sum",
                Section::Pricing => "Pricing",
            };
            prop_assert!(report.results[0].contains(leading_field));
        }
    }

    #[test]
    fn validation_is_idempotent(
        text in "[ -~\\n]{0,200}",
        city in any_value(),
        country in any_value()
    ) {
        let mut fixture = Fixture::new();
        fixture.insert("city", city);
        fixture.insert("country", country);

        let validator = QuoteValidator::new();
        let first = validator.validate(&text, &fixture).unwrap();
        let second = validator.validate(&text, &fixture).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn collect_mode_never_fails(
        text in "[ -~\\n]{0,200}",
        value in any_value()
    ) {
        let mut fixture = Fixture::new();
        fixture.insert("firstname", value);

        let result = QuoteValidator::new().validate(&text, &fixture);
        prop_assert!(result.is_ok());
    }
}
