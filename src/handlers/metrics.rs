// src/handlers/metrics.rs
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::telemetry::MetricsRegistry;

pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// GET /metrics
pub async fn metrics_endpoint(State(registry): State<MetricsRegistry>) -> impl IntoResponse {
    let metrics_text = registry.render();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
        metrics_text,
    )
}
