//! Error types for the vector visibility graph library.

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Series are empty, ragged, too short or contain non-finite values
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An anchor sample has zero (or non-finite) Euclidean norm
    #[error("Degenerate anchor at index {index}: norm {norm} cannot scale a projection")]
    DegenerateAnchor { index: usize, norm: f64 },

    /// The criterion was asked to interpolate over an empty time span
    #[error("Numeric indeterminate: anchor {anchor} and candidate {candidate} share a time index")]
    NumericIndeterminate { anchor: usize, candidate: usize },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    ConfigError(#[from] toml::de::Error),

    /// Configuration could not be rendered
    #[error("Configuration error: {0}")]
    ConfigWriteError(#[from] toml::ser::Error),
}

impl Error {
    /// Whether the error was raised by input validation rather than by I/O
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_) | Error::DegenerateAnchor { .. }
        )
    }
}
