/// Error types for the aggregation functions
use thiserror::Error;

/// Structural errors from grouping and joining. These signal a wiring or
/// data-load defect and abort initialization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregateError {
    /// A requested field is absent from the rows, or unusable in that role
    #[error("Invalid field `{field}`: {reason}")]
    InvalidField { field: String, reason: &'static str },

    /// Aggregation was given no rows
    #[error("Aggregation input is empty")]
    EmptyInput,

    /// A row's group key has no matching aggregate row
    #[error("No aggregate row matches group ({key})")]
    JoinKeyMismatch { key: String },
}

impl AggregateError {
    pub(crate) fn invalid(field: &str, reason: &'static str) -> Self {
        AggregateError::InvalidField {
            field: field.to_string(),
            reason,
        }
    }
}

/// Type alias for Results using AggregateError
pub type Result<T> = std::result::Result<T, AggregateError>;
