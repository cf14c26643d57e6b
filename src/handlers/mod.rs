pub mod greeting;
pub mod metrics;
