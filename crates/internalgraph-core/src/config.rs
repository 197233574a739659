//! Configuration for internalgraph.
//!
//! Layered with figment, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. `internalgraph.toml` (or an explicit file)
//! 3. `INTERNALGRAPH_*` environment variables, `__` separating sections
//!    (e.g. `INTERNALGRAPH_EXPORT__SCRIPT_INDENT=2`)

use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "internalgraph.toml";
/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "INTERNALGRAPH_";
/// Default timestamp rendering, e.g. `2024-01-31T08:15:00Z`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const MAX_INDENT: usize = 16;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A provider failed or a value had the wrong type.
    #[error("Failed to load configuration: {0}")]
    Load(#[source] Box<figment::Error>),

    /// A value was well-typed but out of range.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Dotted key of the offending value.
        key: String,
        /// What is wrong with it.
        message: String,
    },

    /// Rendering the configuration as TOML failed.
    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),

    /// A global tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Export formatting.
    pub export: ExportConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

/// Export formatting options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Indent width of the JSON document; 0 renders it compact.
    pub document_indent: usize,
    /// Indent width of each pushed element in the script fragment; 0
    /// renders elements on one line.
    pub script_indent: usize,
    /// strftime pattern for timestamp values, applied in UTC.
    pub timestamp_format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            document_indent: 2,
            script_indent: 4,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Log output options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `internalgraph_core=debug`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Include the event target (module path) in each line.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: false,
        }
    }
}

impl GraphConfig {
    /// Loads defaults, `internalgraph.toml` from the working directory if
    /// present, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_file(CONFIG_FILE_NAME)
    }

    /// Like [`GraphConfig::load`] with an explicit file. A missing file is
    /// not an error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "configuration loaded");
        Ok(config)
    }

    /// Parses a TOML string on top of the defaults (no environment).
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml))
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks ranges and formats that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.export.validate()?;
        self.logging.validate()
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl ExportConfig {
    /// Checks indent bounds and the timestamp pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, indent) in [
            ("export.document_indent", self.document_indent),
            ("export.script_indent", self.script_indent),
        ] {
            if indent > MAX_INDENT {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("must be at most {MAX_INDENT}, got {indent}"),
                });
            }
        }
        if self.timestamp_format.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "export.timestamp_format".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidValue {
                key: "export.timestamp_format".to_string(),
                message: format!("invalid strftime pattern '{}'", self.timestamp_format),
            });
        }
        Ok(())
    }
}

impl LoggingConfig {
    /// Checks that the level parses as a tracing filter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                message: e.to_string(),
            })
    }
}
