//! Error types for bearing-convert

use std::fmt;
use std::io;

use crate::batch::LineError;

/// Result type for bearing-convert operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in bearing-convert operations
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// CSV serialization error
    Csv(csv::Error),

    /// A coordinate value was out of range
    Coordinate(CoordinateError),

    /// A batch line could not be turned into a coordinate
    Parse(LineError),

    /// Malformed interactive or command-line input
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Csv(e) => write!(f, "CSV error: {}", e),
            Error::Coordinate(e) => write!(f, "{}", e),
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Coordinate(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::InvalidInput(_) => None,
        }
    }
}

/// Why raw numbers could not become a coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    /// Polar distance was negative (or NaN) under validation
    NegativeDistance(f64),
    /// A component was NaN or infinite
    NonFinite { field: &'static str, value: f64 },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::NegativeDistance(value) => {
                write!(f, "Distance must be non-negative (got {})", value)
            }
            CoordinateError::NonFinite { field, value } => {
                write!(f, "{} must be a finite number (got {})", field, value)
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

impl From<CoordinateError> for Error {
    fn from(error: CoordinateError) -> Self {
        Error::Coordinate(error)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Csv(error)
    }
}

impl From<LineError> for Error {
    fn from(error: LineError) -> Self {
        Error::Parse(error)
    }
}
