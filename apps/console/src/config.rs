//! # Console Configuration
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! ## Environment Variables
//! | Variable                   | Default                  |
//! |----------------------------|--------------------------|
//! | `NEU_VENDING_MACHINE_NAME` | `NEU Vending Machine`    |
//! | `NEU_VENDING_LOG`          | `info,neu_vending=debug` |
//! | `NEU_VENDING_JSON_STATUS`  | `false`                  |
//! | `NEU_VENDING_PROMPT`       | `> `                     |
//!
//! `RUST_LOG`, when set, takes priority over `NEU_VENDING_LOG`.

use serde::{Deserialize, Serialize};

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleConfig {
    /// Shown in the welcome banner
    pub machine_name: String,

    /// Fallback tracing filter directive
    pub log_filter: String,

    /// Print `status` as JSON instead of text
    pub json_status: bool,

    /// Prompt printed before each command
    pub prompt: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            machine_name: "NEU Vending Machine".to_string(),
            log_filter: "info,neu_vending=debug".to_string(),
            json_status: false,
            prompt: "> ".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConsoleConfig::default();

        if let Some(name) = lookup("NEU_VENDING_MACHINE_NAME") {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "NEU_VENDING_MACHINE_NAME".to_string(),
                ));
            }
            config.machine_name = name;
        }

        if let Some(filter) = lookup("NEU_VENDING_LOG") {
            config.log_filter = filter;
        }

        if let Some(json) = lookup("NEU_VENDING_JSON_STATUS") {
            config.json_status = json
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("NEU_VENDING_JSON_STATUS".to_string()))?;
        }

        if let Some(prompt) = lookup("NEU_VENDING_PROMPT") {
            config.prompt = prompt;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
