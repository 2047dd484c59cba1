//! Error types for header validation.

use thiserror::Error;

/// Precondition violations detected before headers are compared.
///
/// A header mismatch is not an error; it is reported through
/// [`HeaderReport`](crate::HeaderReport).
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The dataset has no columns to validate.
    #[error("dataset has no columns")]
    EmptyDataset,

    /// The table record lists no expected columns.
    #[error("table {table} declares no expected columns")]
    NoExpectedColumns { table: String },

    /// Several raw headers normalize to the same name.
    #[error("columns {sources:?} all normalize to '{column}'")]
    DuplicateColumn { column: String, sources: Vec<String> },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ValidateError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
