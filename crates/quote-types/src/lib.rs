pub mod types;

pub use types::{FieldOutcome, Section, ValidationReport};
