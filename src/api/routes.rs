use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower::ServiceBuilder;
use axum::extract::DefaultBodyLimit;

use crate::config::ServerConfig;
use super::handlers::*;

pub fn create_router(config: &ServerConfig) -> Router {
    let state = AppState {
        default_profile: config.default_profile,
    };

    Router::new()
        .route("/api/health", get(health))
        .route("/api/polar-to-rect", get(polar_to_rect))
        .route("/api/rect-to-polar", get(rect_to_polar))
        .route("/api/batch", post(batch_json))
        .route("/api/batch/csv", post(batch_csv))
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(config.body_limit))
                .layer(CorsLayer::permissive())
        )
        .with_state(state)
}
