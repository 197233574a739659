//! Tracing subscriber setup for applications embedding the graph.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to the host, which may call [`init_logging`] once at startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{ConfigError, LoggingConfig};

/// Installs a global fmt subscriber filtered by `RUST_LOG`, falling back to
/// `config.level`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for an unparsable level and
/// `ConfigError::Logging` if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    config.validate()?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ConfigError::InvalidValue {
            key: "logging.level".to_string(),
            message: e.to_string(),
        })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(config.with_target))
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    tracing::info!(
        "{} v{} logging initialized",
        crate::NAME,
        crate::VERSION
    );
    Ok(())
}
