// src/middleware/metrics.rs
use axum::{
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::telemetry::MetricsRegistry;

/// Record request count and duration into the application registry
pub async fn metrics_middleware(
    State(registry): State<MetricsRegistry>,
    req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();

    let response = next.run(req).await;

    registry.record_http_request(&method, response.status().as_u16(), start.elapsed());
    response
}
