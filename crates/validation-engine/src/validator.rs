//! Per-field validation: extract, compare, build the outcome.

use quote_types::FieldOutcome;

use crate::{extract, matching};

/// What to do when a field fails to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchMode {
    /// Record the failure and keep checking sibling fields (full report).
    #[default]
    Collect,
    /// Raise a [`crate::ValidationError`] on the first unmatched field.
    Throw,
}

/// Validates one field: extracts the value following `source_label` in
/// `text` and compares it against `expected`.
///
/// An extraction miss is a soft failure: the outcome is unmatched with a
/// warning message, and the run continues. Nothing here panics or errors.
pub fn validate_field(
    field_name: &str,
    expected: &str,
    text: &str,
    source_label: &str,
) -> FieldOutcome {
    let actual = extract::extract(text, source_label);
    outcome_for(field_name, expected, actual)
}

/// Validates the quoted premium via the dedicated pricing extraction.
pub fn validate_pricing(expected: &str, text: &str) -> FieldOutcome {
    let actual = extract::extract_pricing(text);
    outcome_for("Pricing", expected, actual)
}

fn outcome_for(field_name: &str, expected: &str, actual: Option<String>) -> FieldOutcome {
    match actual {
        None => FieldOutcome {
            field_name: field_name.to_string(),
            expected: expected.to_string(),
            actual: None,
            matched: false,
            message: format!("⚠ Field '{}' not found", field_name),
        },
        Some(actual) => {
            let matched = matching::matches(expected, &actual);
            let message = if matched {
                format!(
                    "✓ {}: Expected '{}' matches PDF value '{}'",
                    field_name, expected, actual
                )
            } else {
                format!(
                    "✗ {}: Expected '{}' but found '{}'",
                    field_name, expected, actual
                )
            };
            FieldOutcome {
                field_name: field_name.to_string(),
                expected: expected.to_string(),
                actual: Some(actual),
                matched,
                message,
            }
        }
    }
}
