use serde::{Deserialize, Serialize};

use crate::batch::{ConvertedRow, LineError};
use crate::config::ProfileName;
use crate::plane::Coordinate;
use crate::types::{AngleUnit, Direction};

#[derive(Debug, Serialize, Deserialize)]
pub struct PolarQuery {
    pub distance: f64,
    pub angle: f64,
    #[serde(default)]
    pub profile: Option<ProfileName>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RectQuery {
    pub northing: f64,
    pub easting: f64,
    #[serde(default)]
    pub profile: Option<ProfileName>,
}

#[derive(Debug, Serialize)]
pub struct ConversionResponse {
    pub profile: ProfileName,
    pub input: Coordinate,
    pub output: Coordinate,
    pub input_text: String,
    pub output_text: String,
    pub quadrant: String,
    pub bearing: String,
    pub execution_time_ms: f64,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub direction: Direction,
    pub input: String,
    #[serde(default)]
    pub profile: Option<ProfileName>,
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub direction: Direction,
    pub angle_unit: AngleUnit,
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub execution_time_ms: f64,
    pub rows: Vec<ConvertedRow>,
    pub warnings: Vec<WarningEntry>,
}

#[derive(Debug, Serialize)]
pub struct WarningEntry {
    pub row: usize,
    pub line: String,
    pub message: String,
}

impl From<&LineError> for WarningEntry {
    fn from(error: &LineError) -> Self {
        Self {
            row: error.row,
            line: error.line.clone(),
            message: error.kind.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
