// src/config.rs
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// Go-style bind address: every interface, port 8081.
pub const DEFAULT_ADDR: &str = ":8081";
pub const DEFAULT_TICK_SECONDS: u64 = 10;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub addr: String,
}

/// Background ticker configuration
#[derive(Debug, Deserialize, Clone)]
pub struct TickerConfig {
    pub interval_seconds: u64,
}

impl TickerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

/// Global configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub ticker: TickerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from built-in defaults, an optional `config/default.*` file
    /// and `APP__` prefixed environment variables.
    pub fn from_env() -> Result<Self> {
        Self::load(
            config::File::with_name("config/default").required(false),
            app_environment(),
        )
    }

    /// Same layering as [`Config::from_env`] but with an explicit, required file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(config::File::from(path.as_ref()), app_environment())
    }

    fn load<S>(file: S, env: config::Environment) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .set_default("server.addr", DEFAULT_ADDR)?
            .set_default("ticker.interval_seconds", DEFAULT_TICK_SECONDS)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .add_source(file)
            .add_source(env)
            .build()?;

        let cfg: Config = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.ticker.interval_seconds == 0 {
            return Err(config::ConfigError::Message(
                "ticker.interval_seconds must be at least 1".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

fn app_environment() -> config::Environment {
    config::Environment::with_prefix("APP").separator("__")
}
