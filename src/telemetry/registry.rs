// src/telemetry/registry.rs
use std::sync::Arc;
use std::time::Duration;

use metrics::{Counter, Key, KeyName, Label, Level, Metadata, Recorder};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle, PrometheusRecorder};

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// Naming and help text for a counter, mirroring Prometheus' namespace/subsystem/name split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterOpts {
    pub namespace: String,
    pub subsystem: String,
    pub name: String,
    pub help: String,
}

impl CounterOpts {
    pub fn new(
        namespace: impl Into<String>,
        subsystem: impl Into<String>,
        name: impl Into<String>,
        help: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            subsystem: subsystem.into(),
            name: name.into(),
            help: help.into(),
        }
    }

    /// The API request counter served by this process.
    pub fn request_counter() -> Self {
        Self::new(
            "aiml_infrastructure",
            "server",
            "request_counter",
            "the number of the API request",
        )
    }

    /// `namespace_subsystem_name`, skipping empty parts.
    pub fn fq_name(&self) -> String {
        [&self.namespace, &self.subsystem, &self.name]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("_")
    }
}

/// Monotonic counter handle. Clones share the same underlying atomic.
#[derive(Clone)]
pub struct RequestCounter {
    inner: Counter,
}

impl RequestCounter {
    pub fn increment(&self) {
        self.inner.increment(1);
    }
}

/// A Prometheus recorder owned by the application rather than installed globally.
#[derive(Clone)]
pub struct MetricsRegistry {
    recorder: Arc<PrometheusRecorder>,
    handle: PrometheusHandle,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        Self {
            recorder: Arc::new(recorder),
            handle,
        }
    }

    pub fn register_counter(&self, opts: CounterOpts) -> RequestCounter {
        let name = opts.fq_name();
        self.recorder
            .describe_counter(KeyName::from(name.clone()), None, opts.help.into());

        let inner = self
            .recorder
            .register_counter(&Key::from_name(name), &metadata());
        tracing::debug!(counter = %opts.name, "Registered counter");

        RequestCounter { inner }
    }

    /// Record one served HTTP request under `method` and `status` labels.
    pub fn record_http_request(&self, method: &str, status: u16, elapsed: Duration) {
        let labels = vec![
            Label::new("method", method.to_string()),
            Label::new("status", status.to_string()),
        ];
        let metadata = metadata();

        self.recorder
            .register_counter(&Key::from_parts(HTTP_REQUESTS_TOTAL, labels.clone()), &metadata)
            .increment(1);
        self.recorder
            .register_histogram(
                &Key::from_parts(HTTP_REQUEST_DURATION_SECONDS, labels),
                &metadata,
            )
            .record(elapsed.as_secs_f64());
    }

    /// Current state of every registered metric in the text exposition format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn metadata() -> Metadata<'static> {
    Metadata::new(module_path!(), Level::INFO, Some(module_path!()))
}
