//! Error types for the validation engine

use thiserror::Error;

/// Raised in fail-fast mode when a field does not validate. Collect mode
/// records the same conditions as unmatched outcomes instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' not found in PDF text")]
    FieldNotFound { field: String },

    #[error("Field '{field}': expected '{expected}' but found '{actual}'")]
    Mismatch {
        field: String,
        expected: String,
        actual: String,
    },
}
