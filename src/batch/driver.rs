//! Element-wise conversion of coordinate sequences

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;

use crate::batch::parse::{parse_pair, LineError, LineErrorKind};
use crate::config::ConversionProfile;
use crate::plane::{Converter, Coordinate, PolarCoordinate, RectangularCoordinate};
use crate::types::{AngleUnit, Direction};

/// One successfully converted input, with both of its representations
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConvertedRow {
    /// 1-indexed position in the input
    pub row: usize,
    pub direction: Direction,
    pub polar: PolarCoordinate,
    pub rect: RectangularCoordinate,
}

impl ConvertedRow {
    /// The value that was given
    pub fn input(&self) -> Coordinate {
        match self.direction {
            Direction::PolarToRect => Coordinate::Polar(self.polar),
            Direction::RectToPolar => Coordinate::Rectangular(self.rect),
        }
    }

    /// The value that was computed
    pub fn output(&self) -> Coordinate {
        match self.direction {
            Direction::PolarToRect => Coordinate::Rectangular(self.rect),
            Direction::RectToPolar => Coordinate::Polar(self.polar),
        }
    }
}

impl fmt::Display for ConvertedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {} -> {}", self.row, self.input(), self.output())
    }
}

/// Outcome of a batch: converted rows and per-line warnings, both in input order
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub direction: Direction,
    pub angle_unit: AngleUnit,
    pub rows: Vec<ConvertedRow>,
    pub warnings: Vec<LineError>,
}

impl BatchReport {
    pub fn new(direction: Direction, angle_unit: AngleUnit) -> Self {
        Self {
            direction,
            angle_unit,
            rows: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Number of input lines seen
    pub fn total(&self) -> usize {
        self.rows.len() + self.warnings.len()
    }

    pub fn successful(&self) -> usize {
        self.rows.len()
    }

    pub fn failed(&self) -> usize {
        self.warnings.len()
    }

    /// True when no input lines were seen at all
    pub fn nothing_to_process(&self) -> bool {
        self.total() == 0
    }

    /// True when no row converted successfully
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The computed values, in input order
    pub fn outputs(&self) -> Vec<Coordinate> {
        self.rows.iter().map(ConvertedRow::output).collect()
    }

    fn record(&mut self, result: Result<ConvertedRow, LineError>, sink: &mut impl FnMut(&ConvertedRow)) {
        match result {
            Ok(row) => {
                tracing::info!(row = row.row, "{}", row);
                sink(&row);
                self.rows.push(row);
            }
            Err(warning) => {
                tracing::warn!(row = warning.row, "skipping {}", warning);
                self.warnings.push(warning);
            }
        }
    }
}

/// Applies one conversion direction to every element of a sequence
#[derive(Debug, Clone, Copy)]
pub struct BatchConverter {
    converter: Converter,
    direction: Direction,
}

impl BatchConverter {
    /// Creates a batch converter for the given direction and profile
    pub fn new(direction: Direction, profile: ConversionProfile) -> Self {
        Self {
            converter: Converter::new(profile),
            direction,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn profile(&self) -> ConversionProfile {
        self.converter.profile()
    }

    /// Converts the pair of numbers found on one line
    pub fn convert_values(&self, row: usize, first: f64, second: f64) -> Result<ConvertedRow, LineErrorKind> {
        match self.direction {
            Direction::PolarToRect => {
                let polar = self.converter.polar(first, second)?;
                let rect = self.converter.polar_to_rect(&polar)?;
                Ok(ConvertedRow {
                    row,
                    direction: self.direction,
                    polar,
                    rect,
                })
            }
            Direction::RectToPolar => {
                let rect = self.converter.rect(first, second)?;
                Ok(ConvertedRow {
                    row,
                    direction: self.direction,
                    polar: self.converter.rect_to_polar(&rect),
                    rect,
                })
            }
        }
    }

    /// Parses and converts a single batch line
    pub fn convert_line(&self, row: usize, line: &str) -> Result<ConvertedRow, LineError> {
        parse_pair(line, self.direction)
            .and_then(|(first, second)| self.convert_values(row, first, second))
            .map_err(|kind| LineError::new(row, line, kind))
    }

    /// Converts a block of batch text, one coordinate pair per line
    ///
    /// Surrounding whitespace of the whole block is ignored; rows are
    /// numbered from the first remaining line.
    pub fn convert_text(&self, text: &str) -> BatchReport {
        self.convert_lines(text.trim().lines())
    }

    /// Converts lines in order, numbering them from 1
    pub fn convert_lines<I, S>(&self, lines: I) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.convert_lines_with(lines, |_| {})
    }

    /// Converts lines in order, handing each converted row to `sink` as it is produced
    pub fn convert_lines_with<I, S, F>(&self, lines: I, mut sink: F) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&ConvertedRow),
    {
        let mut report = self.empty_report();

        for (index, line) in lines.into_iter().enumerate() {
            report.record(self.convert_line(index + 1, line.as_ref()), &mut sink);
        }

        report
    }

    /// Same as [`Self::convert_text`], converting lines on the rayon thread pool
    ///
    /// Rows and warnings come back in the same order as the serial path.
    pub fn convert_text_parallel(&self, text: &str) -> BatchReport {
        let lines: Vec<&str> = text.trim().lines().collect();

        let results: Vec<Result<ConvertedRow, LineError>> = lines
            .par_iter()
            .enumerate()
            .map(|(index, line)| self.convert_line(index + 1, line))
            .collect();

        let mut report = self.empty_report();
        for result in results {
            report.record(result, &mut discard);
        }
        report
    }

    /// Converts already-typed coordinates
    ///
    /// Elements from the wrong coordinate system are reported as warnings
    /// instead of being converted.
    pub fn convert_sequence(&self, coords: &[Coordinate]) -> BatchReport {
        let mut report = self.empty_report();

        for (index, coord) in coords.iter().enumerate() {
            let row = index + 1;
            let result = match (self.direction, coord) {
                (Direction::PolarToRect, Coordinate::Polar(polar)) => {
                    let polar = polar.to_unit(self.profile().angle_unit);
                    self.convert_values(row, polar.distance(), polar.angle())
                }
                (Direction::RectToPolar, Coordinate::Rectangular(rect)) => {
                    self.convert_values(row, rect.northing, rect.easting)
                }
                _ => Err(LineErrorKind::DirectionMismatch {
                    expected: self.direction,
                }),
            };

            report.record(
                result.map_err(|kind| LineError::new(row, coord.to_string(), kind)),
                &mut discard,
            );
        }

        report
    }

    fn empty_report(&self) -> BatchReport {
        BatchReport::new(self.direction, self.profile().angle_unit)
    }
}

fn discard(_: &ConvertedRow) {}
