//! CSV export of batch results

use std::io::Write;
use std::path::Path;

use crate::batch::driver::{BatchReport, ConvertedRow};
use crate::error::{Error, Result};
use crate::types::{AngleUnit, Direction};

/// Column headers for a report in the given direction and unit
pub fn headers(direction: Direction, unit: AngleUnit) -> [String; 5] {
    let distance = "Distance (m)".to_string();
    let angle = format!("Angle ({})", unit.label());
    let northing = "Northing (m)".to_string();
    let easting = "Easting (m)".to_string();

    match direction {
        Direction::PolarToRect => ["Row".to_string(), distance, angle, northing, easting],
        Direction::RectToPolar => ["Row".to_string(), northing, easting, distance, angle],
    }
}

fn record(row: &ConvertedRow) -> (usize, f64, f64, f64, f64) {
    let (distance, angle) = (row.polar.distance(), row.polar.angle());
    let (northing, easting) = (row.rect.northing, row.rect.easting);

    match row.direction {
        Direction::PolarToRect => (row.row, distance, angle, northing, easting),
        Direction::RectToPolar => (row.row, northing, easting, distance, angle),
    }
}

/// Writes the successful rows of a report as CSV, header first
pub fn write_csv<W: Write>(report: &BatchReport, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(headers(report.direction, report.angle_unit))?;
    for row in &report.rows {
        csv_writer.serialize(record(row))?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Renders a report as a CSV string
pub fn to_csv_string(report: &BatchReport) -> Result<String> {
    let mut buffer = Vec::with_capacity(report.rows.len() * 48);
    write_csv(report, &mut buffer)?;

    String::from_utf8(buffer).map_err(|e| Error::InvalidInput(format!("CSV output is not UTF-8: {}", e)))
}

/// Writes a report to a CSV file, replacing any existing file
pub fn write_csv_file<P: AsRef<Path>>(report: &BatchReport, path: P) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(report, std::io::BufWriter::new(file))
}
