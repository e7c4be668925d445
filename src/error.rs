//! Crate-wide error type

use thiserror::Error;

/// Errors produced by projections, scenario loading, and exports
#[derive(Debug, Error)]
pub enum Error {
    /// Input failed boundary validation; no computation was attempted
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// File-level failure while writing an export or report.
    /// The in-memory projection result is unaffected.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed scenario CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
