// src/main.rs
use aiml_infrastructure_server::{
    config::Config,
    server::{self, AppState},
    telemetry::{CounterOpts, MetricsRegistry},
    ticker::spawn_ticker,
};
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let cfg = Config::from_env()?;

    // Initialize tracing subscriber with env filter
    tracing_subscriber::registry()
        .with(EnvFilter::new(&cfg.logging.level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Server starting...");
    tracing::info!(?cfg, "⚙️ Loaded configuration");

    let registry = MetricsRegistry::new();
    let request_counter = registry.register_counter(CounterOpts::request_counter());
    tracing::info!("✅ Metrics registry initialized");

    // Runs until the process exits
    spawn_ticker(request_counter.clone(), cfg.ticker.interval());

    let app = server::router(AppState::new(registry, request_counter));
    server::serve(&cfg.server.addr, app).await?;

    Ok(())
}
