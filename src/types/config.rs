//! Configuration for Memorec.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{MemorecError, MemorecResult};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "memorec.toml";

/// Accepted values for `general.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Accepted values for `general.log_format`.
pub const LOG_FORMATS: &[&str] = &["text", "json"];

/// Main configuration for Memorec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Evaluator settings.
    #[serde(default)]
    pub evaluator: EvaluatorConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Evaluator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Recursion depth ceiling used when the caller does not pass one.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Keep a memo table of computed subproblems.
    #[serde(default = "default_true")]
    pub memoize: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            memoize: true,
        }
    }
}

fn default_max_depth() -> usize {
    1000
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> MemorecResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the logging setup would not understand.
    pub fn validate(&self) -> MemorecResult<()> {
        if !LOG_LEVELS.contains(&self.general.log_level.as_str()) {
            return Err(MemorecError::config(format!(
                "invalid log_level '{}' (expected one of: {})",
                self.general.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&self.general.log_format.as_str()) {
            return Err(MemorecError::config(format!(
                "invalid log_format '{}' (expected one of: {})",
                self.general.log_format,
                LOG_FORMATS.join(", ")
            )));
        }
        Ok(())
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> MemorecResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            evaluator: EvaluatorConfig::default(),
        }
    }

    /// Loads configuration from `path`, or uses defaults if the file is missing.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> MemorecResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default_config())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
