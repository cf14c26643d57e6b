// src/telemetry/exporter.rs
use axum::{routing::get, Router};
use std::thread;
use tracing::{error, info};

use crate::error::Result;
use crate::handlers::metrics::metrics_endpoint;
use crate::server::{listen_addr, serve};
use crate::telemetry::MetricsRegistry;

/// Serves only `/metrics` for a registry, on its own background thread.
#[derive(Clone)]
pub struct MetricsServer {
    host: String,
    registry: MetricsRegistry,
}

impl MetricsServer {
    pub fn new(host: impl Into<String>, registry: MetricsRegistry) -> Self {
        Self {
            host: host.into(),
            registry,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Spawn the listener thread and return immediately.
    ///
    /// Always `Ok(())`: bind and serve failures happen on the background
    /// thread and are only logged there.
    pub fn start(&self) -> Result<()> {
        let addr = listen_addr(&self.host);
        let app = Router::new()
            .route("/metrics", get(metrics_endpoint))
            .with_state(self.registry.clone());

        let spawned = thread::Builder::new()
            .name("metrics-server".to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        error!(%addr, error = %e, "❌ Failed to build metrics server runtime");
                        return;
                    }
                };

                info!(%addr, "📈 Metrics server starting");
                if let Err(e) = runtime.block_on(serve(&addr, app)) {
                    error!(%addr, error = %e, "❌ Metrics server stopped");
                }
            });

        if let Err(e) = spawned {
            error!(host = %self.host, error = %e, "❌ Failed to spawn metrics server thread");
        }

        Ok(())
    }

    /// Placeholder: the listener thread runs until the process exits.
    pub fn stop(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::CounterOpts;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::time::Duration;
    use tokio_test::assert_ok;

    #[test]
    fn start_reports_success_when_address_is_in_use() {
        let occupied = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = occupied.local_addr().unwrap().to_string();

        let server = MetricsServer::new(addr.clone(), MetricsRegistry::new());

        assert_ok!(server.start());
        assert_eq!(server.host(), addr);
        server.stop();
    }

    #[test]
    fn stop_is_a_no_op() {
        let server = MetricsServer::new("127.0.0.1:0", MetricsRegistry::new());

        server.stop();
        server.stop();
        assert_eq!(server.host(), "127.0.0.1:0");
    }

    #[test]
    fn serves_metrics_on_a_free_address() {
        let port = {
            let probe = TcpListener::bind("127.0.0.1:0").unwrap();
            probe.local_addr().unwrap().port()
        };
        let addr = format!("127.0.0.1:{}", port);

        let registry = MetricsRegistry::new();
        registry
            .register_counter(CounterOpts::request_counter())
            .increment();
        assert_ok!(MetricsServer::new(addr.clone(), registry).start());

        let mut response = String::new();
        for _ in 0..100 {
            if let Ok(mut stream) = TcpStream::connect(&addr) {
                stream
                    .write_all(b"GET /metrics HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
                    .unwrap();
                stream.read_to_string(&mut response).unwrap();
                break;
            }
            std::thread::sleep(Duration::from_millis(20));
        }

        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains("aiml_infrastructure_server_request_counter 1"));
    }
}
