//! Error types for the flight-data crate.
//!
//! Construction of the model is fail-fast: a missing timestamp or a malformed
//! line surfaces immediately to the caller, nothing is recovered internally.

use thiserror::Error;

/// Errors that can occur while building or parsing flights
#[derive(Error, Debug)]
pub enum FlightDataError {
    /// A required value was absent or unusable (missing timestamp, odd number
    /// of boundary timestamps)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Text in canonical form couldn't be parsed
    ///
    /// `line` is 1-based; single-value parses (e.g. `str::parse`) report line 1.
    #[error("Parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// I/O error occurred while reading a flight file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FlightDataError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        FlightDataError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Re-anchor a parse error at a different line (used when a single
    /// flight is parsed as part of a larger file)
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            FlightDataError::Parse { reason, .. } => FlightDataError::Parse { line, reason },
            other => other,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FlightDataError>;
