//! Validation engine for insurance-quote PDFs.
//!
//! The engine consumes the raw text extracted from a generated quote PDF and
//! a fixture of expected field values, and produces a per-field pass/fail
//! report. It performs no I/O: acquiring the PDF and extracting its text are
//! the caller's job.

pub mod error;
pub mod extract;
pub mod fixture;
pub mod matching;
pub mod report;
pub mod sections;
pub mod validator;

use quote_types::{FieldOutcome, Section, ValidationReport};

pub use error::ValidationError;
pub use fixture::Fixture;
pub use validator::MismatchMode;

use report::ReportBuilder;

/// QuoteValidator entry point.
///
/// A single pure pass over the text: no retries, no state between calls.
/// Validating the same inputs twice yields structurally identical reports.
pub struct QuoteValidator {
    mode: MismatchMode,
}

impl QuoteValidator {
    pub fn new() -> Self {
        Self {
            mode: MismatchMode::Collect,
        }
    }

    pub fn with_mode(mode: MismatchMode) -> Self {
        Self { mode }
    }

    /// Validates the standard quote sections (Insurant, Vehicle, Product).
    pub fn validate(&self, text: &str, fixture: &Fixture) -> Result<ValidationReport, ValidationError> {
        self.validate_sections(
            text,
            fixture,
            &[Section::Insurant, Section::Vehicle, Section::Product],
            None,
        )
    }

    /// Validates the standard sections plus the quoted premium.
    pub fn validate_with_pricing(
        &self,
        text: &str,
        fixture: &Fixture,
        expected_pricing: &str,
    ) -> Result<ValidationReport, ValidationError> {
        self.validate_sections(
            text,
            fixture,
            &[
                Section::Insurant,
                Section::Vehicle,
                Section::Product,
                Section::Pricing,
            ],
            Some(expected_pricing),
        )
    }

    /// Validates an arbitrary set of sections against `fixture`.
    ///
    /// `expected_pricing` feeds the Pricing section when it is invoked; when
    /// omitted, the fixture's `pricing` key is used instead.
    ///
    /// In `Collect` mode this never fails; in `Throw` mode it returns an
    /// error for the first unmatched field.
    pub fn validate_sections(
        &self,
        text: &str,
        fixture: &Fixture,
        sections: &[Section],
        expected_pricing: Option<&str>,
    ) -> Result<ValidationReport, ValidationError> {
        let mut builder = ReportBuilder::new();

        for &section in sections {
            if section == Section::Pricing {
                let expected = expected_pricing.unwrap_or_else(|| fixture.get("pricing"));
                let outcome = validator::validate_pricing(expected, text);
                self.record(&mut builder, outcome)?;
            } else {
                for field in sections::fields_for(section) {
                    let outcome = validator::validate_field(
                        field.name,
                        fixture.get(field.fixture_key),
                        text,
                        field.source_label,
                    );
                    self.record(&mut builder, outcome)?;
                }
            }
            tracing::debug!(?section, "section validated");
        }

        Ok(builder.finish(text))
    }

    /// Validates an explicit field list, for callers that check a subset of
    /// a section's table.
    pub fn validate_fields(
        &self,
        text: &str,
        fixture: &Fixture,
        fields: &[sections::FieldSpec],
    ) -> Result<ValidationReport, ValidationError> {
        let mut builder = ReportBuilder::new();
        for field in fields {
            let outcome = validator::validate_field(
                field.name,
                fixture.get(field.fixture_key),
                text,
                field.source_label,
            );
            self.record(&mut builder, outcome)?;
        }
        Ok(builder.finish(text))
    }

    fn record(
        &self,
        builder: &mut ReportBuilder,
        outcome: FieldOutcome,
    ) -> Result<(), ValidationError> {
        if !outcome.matched && self.mode == MismatchMode::Throw {
            return Err(match outcome.actual {
                None => ValidationError::FieldNotFound {
                    field: outcome.field_name,
                },
                Some(actual) => ValidationError::Mismatch {
                    field: outcome.field_name,
                    expected: outcome.expected,
                    actual,
                },
            });
        }
        builder.record(&outcome);
        Ok(())
    }
}

impl Default for QuoteValidator {
    fn default() -> Self {
        Self::new()
    }
}
