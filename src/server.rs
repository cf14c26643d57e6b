// src/server.rs
use axum::{
    extract::FromRef,
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::error::{Result, ServerError};
use crate::handlers::{greeting::hello, metrics::metrics_endpoint};
use crate::middleware::{logging::request_logger, metrics::metrics_middleware};
use crate::telemetry::{MetricsRegistry, RequestCounter};

#[derive(Clone)]
pub struct AppState {
    pub registry: MetricsRegistry,
    pub request_counter: RequestCounter,
}

impl AppState {
    pub fn new(registry: MetricsRegistry, request_counter: RequestCounter) -> Self {
        Self {
            registry,
            request_counter,
        }
    }
}

impl FromRef<AppState> for MetricsRegistry {
    fn from_ref(state: &AppState) -> Self {
        state.registry.clone()
    }
}

/// Expand a Go-style `:port` address to all interfaces.
pub fn listen_addr(addr: &str) -> String {
    match addr.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{}", port),
        None => addr.to_string(),
    }
}

/// Build the greeting and metrics routes with the logging and metrics layers.
///
/// Every request that is not `GET /metrics` greets, whatever its method or path.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(hello))
        .route("/metrics", get(metrics_endpoint))
        .fallback(hello)
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(axum::middleware::from_fn(request_logger))
                .layer(axum::middleware::from_fn_with_state(
                    state.registry.clone(),
                    metrics_middleware,
                )),
        )
        .with_state(state)
}

/// Bind `addr` and serve `app` until the process exits.
pub async fn serve(addr: &str, app: Router) -> Result<()> {
    let addr = listen_addr(addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(%addr, "🌐 Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
