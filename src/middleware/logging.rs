// src/middleware/logging.rs
use axum::{http::Request, middleware::Next, response::Response};
use tracing::info;
use uuid::Uuid;

/// Request logging middleware with correlation ID
pub async fn request_logger(req: Request<axum::body::Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    info!(%request_id, method = %req.method(), uri = %req.uri(), "➡️ Request received");

    let response = next.run(req).await;

    info!(%request_id, status = %response.status(), "⬅️ Response sent");
    response
}
