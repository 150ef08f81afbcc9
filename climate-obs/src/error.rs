/// Error types for loading and serializing climate datasets
use thiserror::Error;

/// Errors raised while loading the four datasets or writing a table back out.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Failed to parse or write CSV data
    #[error("Failed to process CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to read a dataset file
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// A row parsed but carries inconsistent values
    #[error("Invalid row {line} in {dataset}: {message}")]
    Parse {
        dataset: &'static str,
        line: u64,
        message: String,
    },

    /// A dataset loaded with zero rows
    #[error("Dataset {0} has no rows")]
    EmptyDataset(&'static str),
}

/// A city name outside the known set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown city: {0}")]
pub struct UnknownCity(pub String);

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;
