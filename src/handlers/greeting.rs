// src/handlers/greeting.rs
use axum::extract::State;

use crate::server::AppState;

pub const GREETING: &str = "Hello World!";

/// GET /
pub async fn hello(State(state): State<AppState>) -> &'static str {
    state.request_counter.increment();
    GREETING
}
