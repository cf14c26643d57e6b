// src/ticker.rs
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::telemetry::RequestCounter;

/// Increment `counter` once every `interval`, for as long as the runtime lives.
///
/// The first increment happens after one full interval. There is no
/// cancellation hook; the handle is returned but never needs to be awaited.
pub fn spawn_ticker(counter: RequestCounter, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            counter.increment();
            tracing::debug!("⏱️ Ticker incremented request counter");
        }
    })
}
