//! Incremental assembly of a [`ValidationReport`].

use quote_types::{FieldOutcome, ValidationReport};

/// Accumulates field outcomes in table order. `is_valid` is the running AND
/// of every recorded outcome's `matched` flag.
#[derive(Debug)]
pub struct ReportBuilder {
    is_valid: bool,
    results: Vec<String>,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            results: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: &FieldOutcome) {
        self.is_valid &= outcome.matched;
        self.results.push(outcome.message.clone());
    }

    /// Finalizes the report, attaching the full extracted text for
    /// downstream diagnostics.
    pub fn finish(self, raw_text: &str) -> ValidationReport {
        ValidationReport {
            is_valid: self.is_valid,
            results: self.results,
            raw_text: raw_text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(matched: bool, message: &str) -> FieldOutcome {
        FieldOutcome {
            field_name: "Country".to_string(),
            expected: "Brazil".to_string(),
            actual: Some("Brazil".to_string()),
            matched,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = ReportBuilder::new().finish("text");
        assert!(report.is_valid);
        assert!(report.results.is_empty());
        assert_eq!(report.raw_text, "text");
    }

    #[test]
    fn test_one_failure_invalidates_report() {
        let mut builder = ReportBuilder::new();
        builder.record(&outcome(true, "✓ a"));
        builder.record(&outcome(false, "✗ b"));
        builder.record(&outcome(true, "✓ c"));
        let report = builder.finish("");
        assert!(!report.is_valid);
        assert_eq!(report.results, vec!["✓ a", "✗ b", "✓ c"]);
    }
}
