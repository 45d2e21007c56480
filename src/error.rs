use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type used throughout the crate.
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Error type returned by loading, conversion, reduction and reporting functions.
///
/// A single enum is shared across the whole pipeline so callers can propagate with `?` from
/// [`crate::ingestion::load_from_path`] straight through to the report generators.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The input file does not exist.
    #[error("resource not found: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    /// Underlying I/O error (e.g. permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error (malformed quoting, invalid UTF-8, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A data line is too short to carry date, minimum and maximum.
    #[error("missing field at row {row}: expected column '{column}'")]
    MissingField { row: usize, column: String },

    /// A temperature field could not be parsed as an integer.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    FormatError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A scalar passed to a converter is not a number or numeric string.
    #[error("invalid number: '{raw}'")]
    InvalidNumber { raw: String },

    /// A date string is not an ISO-8601 calendar date.
    #[error("invalid date: '{raw}' (expected ISO format YYYY-MM-DD)")]
    InvalidDate { raw: String },

    /// An element of a reducer's input is not numeric.
    #[error("invalid element at index {index}: '{raw}' is not a number")]
    InvalidElement { index: usize, raw: String },

    /// A mean was requested over zero elements.
    #[error("cannot compute the mean of an empty sequence")]
    EmptyInput,
}
