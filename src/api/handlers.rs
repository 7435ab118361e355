use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use axum::extract::multipart::{Field, Multipart};
use std::time::Instant;

use crate::batch::{to_csv_string, BatchConverter, BatchReport};
use crate::config::ProfileName;
use crate::plane::{Converter, Coordinate, Quadrant, QuadrantBearing};
use crate::types::Direction;
use crate::CoordinateError;
use super::models::*;

/// Shared handler state
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub default_profile: ProfileName,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse { error: message.into() }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn polar_to_rect(
    State(state): State<AppState>,
    Query(req): Query<PolarQuery>,
) -> Result<Json<ConversionResponse>, ApiError> {
    let start = Instant::now();
    let profile = req.profile.unwrap_or(state.default_profile);
    let converter = Converter::new(profile.profile());

    let polar = converter.polar(req.distance, req.angle).map_err(validation_error)?;
    let rect = converter.polar_to_rect(&polar).map_err(validation_error)?;

    tracing::info!(%profile, "{} -> {}", polar, rect);

    Ok(Json(ConversionResponse {
        profile,
        input: Coordinate::Polar(polar),
        output: Coordinate::Rectangular(rect),
        input_text: polar.to_string(),
        output_text: rect.to_string(),
        quadrant: Quadrant::of(&rect).to_string(),
        bearing: QuadrantBearing::of(&polar).to_string(),
        execution_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    }))
}

pub async fn rect_to_polar(
    State(state): State<AppState>,
    Query(req): Query<RectQuery>,
) -> Result<Json<ConversionResponse>, ApiError> {
    let start = Instant::now();
    let profile = req.profile.unwrap_or(state.default_profile);
    let converter = Converter::new(profile.profile());

    let rect = converter.rect(req.northing, req.easting).map_err(validation_error)?;
    let polar = converter.rect_to_polar(&rect);

    tracing::info!(%profile, "{} -> {}", rect, polar);

    Ok(Json(ConversionResponse {
        profile,
        input: Coordinate::Rectangular(rect),
        output: Coordinate::Polar(polar),
        input_text: rect.to_string(),
        output_text: polar.to_string(),
        quadrant: Quadrant::of(&rect).to_string(),
        bearing: QuadrantBearing::of(&polar).to_string(),
        execution_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    }))
}

pub async fn batch_json(
    State(state): State<AppState>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    let start = Instant::now();
    let profile = req.profile.unwrap_or(state.default_profile);

    let report = run_batch(req.direction, profile, &req.input, req.parallel)?;

    Ok(Json(BatchResponse {
        direction: report.direction,
        angle_unit: report.angle_unit,
        total: report.total(),
        successful: report.successful(),
        failed: report.failed(),
        execution_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        warnings: report.warnings.iter().map(WarningEntry::from).collect(),
        rows: report.rows,
    }))
}

pub async fn batch_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let start = Instant::now();

    let mut input: Option<String> = None;
    let mut direction: Option<Direction> = None;
    let mut profile = state.default_profile;
    let mut parallel = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "input" | "file" => {
                let bytes = field.bytes().await.map_err(|e| {
                    api_error(StatusCode::BAD_REQUEST, format!("Failed to read {}: {}", name, e))
                })?;
                let text = String::from_utf8(bytes.to_vec()).map_err(|_| {
                    api_error(StatusCode::BAD_REQUEST, format!("Field {} is not UTF-8 text", name))
                })?;
                input = Some(text);
            }
            "direction" => {
                let text = read_text(field, &name).await?;
                direction = Some(Direction::parse(&text).ok_or_else(|| {
                    api_error(StatusCode::BAD_REQUEST, format!("Unknown direction '{}'", text.trim()))
                })?);
            }
            "profile" => {
                let text = read_text(field, &name).await?;
                profile = ProfileName::parse(&text).ok_or_else(|| {
                    api_error(StatusCode::BAD_REQUEST, format!("Unknown profile '{}'", text.trim()))
                })?;
            }
            "parallel" => {
                let text = read_text(field, &name).await?;
                parallel = matches!(text.trim(), "true" | "1" | "yes");
            }
            _ => {}
        }
    }

    let input = input.ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Missing input text or file"))?;
    let direction = direction.ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Missing direction parameter"))?;

    let report = run_batch(direction, profile, &input, parallel)?;
    let body = render_csv_with_stats(&report, start)
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to write CSV: {}", e)))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime::TEXT_CSV_UTF_8.as_ref())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", direction.export_file_name()),
        )
        .body(Body::from(body))
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to build response: {}", e)))
}

async fn read_text(field: Field<'_>, name: &str) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("Failed to read {}: {}", name, e)))
}

fn run_batch(
    direction: Direction,
    profile: ProfileName,
    input: &str,
    parallel: bool,
) -> Result<BatchReport, ApiError> {
    let converter = BatchConverter::new(direction, profile.profile());
    let report = if parallel {
        converter.convert_text_parallel(input)
    } else {
        converter.convert_text(input)
    };

    tracing::info!(
        %direction,
        %profile,
        total = report.total(),
        successful = report.successful(),
        failed = report.failed(),
        "batch processed"
    );

    if report.nothing_to_process() {
        return Err(api_error(StatusCode::BAD_REQUEST, "No valid coordinates to process"));
    }

    Ok(report)
}

fn render_csv_with_stats(report: &BatchReport, start: Instant) -> crate::Result<String> {
    let table = to_csv_string(report)?;
    let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let mut csv_output = String::with_capacity(table.len() + 160);
    csv_output.push_str("# Statistics\n");
    csv_output.push_str(&format!("# Total lines: {}\n", report.total()));
    csv_output.push_str(&format!("# Successful: {}\n", report.successful()));
    csv_output.push_str(&format!("# Failed: {}\n", report.failed()));
    for warning in &report.warnings {
        csv_output.push_str(&format!("# Skipped row {}: {}\n", warning.row, warning.kind));
    }
    csv_output.push_str(&format!("# Execution time: {:.2} ms\n", execution_time_ms));
    csv_output.push_str(&table);

    Ok(csv_output)
}

fn validation_error(error: CoordinateError) -> ApiError {
    tracing::warn!("rejected conversion: {}", error);
    api_error(StatusCode::BAD_REQUEST, error.to_string())
}
