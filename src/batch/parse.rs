//! Parsing of `<number>, <number>` batch lines

use std::fmt;

use crate::error::CoordinateError;
use crate::types::Direction;

/// Why a single batch line was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum LineErrorKind {
    /// The line did not split into exactly two comma-separated fields
    FieldCount(usize),
    /// A field was not a floating-point number
    InvalidNumber { field: &'static str, value: String },
    /// A polar distance was negative under a validating profile
    NegativeDistance(f64),
    /// A typed element belonged to the wrong coordinate system for the batch
    DirectionMismatch { expected: Direction },
}

impl fmt::Display for LineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineErrorKind::FieldCount(found) => {
                write!(f, "expected 2 comma-separated fields, found {}", found)
            }
            LineErrorKind::InvalidNumber { field, value } => {
                write!(f, "{} '{}' is not a number", field, value)
            }
            LineErrorKind::NegativeDistance(value) => {
                write!(f, "distance must be non-negative (got {})", value)
            }
            LineErrorKind::DirectionMismatch { expected } => {
                write!(f, "coordinate does not match batch direction {}", expected)
            }
        }
    }
}

impl From<CoordinateError> for LineErrorKind {
    fn from(error: CoordinateError) -> Self {
        match error {
            CoordinateError::NegativeDistance(value) => LineErrorKind::NegativeDistance(value),
            CoordinateError::NonFinite { field, value } => LineErrorKind::InvalidNumber {
                field,
                value: value.to_string(),
            },
        }
    }
}

/// A rejected batch line, kept so the caller can report it
#[derive(Debug, Clone, PartialEq)]
pub struct LineError {
    /// 1-indexed row number
    pub row: usize,
    /// The offending line as given
    pub line: String,
    pub kind: LineErrorKind,
}

impl LineError {
    pub fn new(row: usize, line: impl Into<String>, kind: LineErrorKind) -> Self {
        Self {
            row,
            line: line.into(),
            kind,
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} ({:?}): {}", self.row, self.line, self.kind)
    }
}

impl std::error::Error for LineError {}

/// Splits a line into its two numeric fields
///
/// `nan` and infinities parse as floats but are rejected here like any
/// other non-number. `direction` only supplies the field names used in error messages.
pub fn parse_pair(line: &str, direction: Direction) -> Result<(f64, f64), LineErrorKind> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 2 {
        return Err(LineErrorKind::FieldCount(parts.len()));
    }

    let (first_name, second_name) = direction.input_fields();
    let first = parse_field(parts[0], first_name)?;
    let second = parse_field(parts[1], second_name)?;

    Ok((first, second))
}

fn parse_field(raw: &str, field: &'static str) -> Result<f64, LineErrorKind> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LineErrorKind::InvalidNumber {
            field,
            value: trimmed.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair_with_whitespace() {
        let pair = parse_pair("  100.0 ,45.5 ", Direction::PolarToRect).unwrap();
        assert_eq!(pair, (100.0, 45.5));
    }

    #[test]
    fn test_parse_pair_scientific_and_negative() {
        let pair = parse_pair("-1e2, 3", Direction::RectToPolar).unwrap();
        assert_eq!(pair, (-100.0, 3.0));
    }

    #[test]
    fn test_parse_pair_field_count() {
        assert_eq!(
            parse_pair("1, 2, 3", Direction::PolarToRect),
            Err(LineErrorKind::FieldCount(3))
        );
        assert_eq!(parse_pair("42", Direction::PolarToRect), Err(LineErrorKind::FieldCount(1)));
        assert_eq!(parse_pair("", Direction::PolarToRect), Err(LineErrorKind::FieldCount(1)));
    }

    #[test]
    fn test_parse_pair_names_bad_field() {
        let err = parse_pair("bad, data", Direction::PolarToRect).unwrap_err();
        assert_eq!(
            err,
            LineErrorKind::InvalidNumber {
                field: "Distance",
                value: "bad".to_string()
            }
        );

        let err = parse_pair("1.0, east", Direction::RectToPolar).unwrap_err();
        assert!(err.to_string().contains("Easting 'east'"));
    }

    #[test]
    fn test_parse_pair_rejects_non_finite() {
        assert_eq!(
            parse_pair("nan, 1", Direction::RectToPolar),
            Err(LineErrorKind::InvalidNumber {
                field: "Northing",
                value: "nan".to_string()
            })
        );
        assert_eq!(
            parse_pair("5, inf", Direction::PolarToRect),
            Err(LineErrorKind::InvalidNumber {
                field: "Angle",
                value: "inf".to_string()
            })
        );
        assert!(parse_pair("-Infinity, 0", Direction::PolarToRect).is_err());
    }

    #[test]
    fn test_coordinate_error_kinds() {
        assert_eq!(
            LineErrorKind::from(CoordinateError::NegativeDistance(-2.0)),
            LineErrorKind::NegativeDistance(-2.0)
        );
        assert_eq!(
            LineErrorKind::from(CoordinateError::NonFinite {
                field: "Easting",
                value: f64::NEG_INFINITY
            }),
            LineErrorKind::InvalidNumber {
                field: "Easting",
                value: "-inf".to_string()
            }
        );
    }

    #[test]
    fn test_line_error_display() {
        let err = LineError::new(2, "bad, data", LineErrorKind::FieldCount(1));
        let text = err.to_string();
        assert!(text.starts_with("line 2"));
        assert!(text.contains("bad, data"));
    }
}
