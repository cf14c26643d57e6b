//! Prometheus metrics: the per-process registry, the request counter and the
//! standalone exporter server.

pub mod exporter;
pub mod registry;

pub use exporter::MetricsServer;
pub use registry::{CounterOpts, MetricsRegistry, RequestCounter};

/// Read an unlabelled sample value out of a text exposition.
#[cfg(test)]
pub(crate) fn sample_value(rendered: &str, name: &str) -> Option<u64> {
    rendered.lines().find_map(|line| {
        line.strip_prefix(name)?
            .strip_prefix(' ')?
            .trim()
            .parse()
            .ok()
    })
}
