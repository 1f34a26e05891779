//! # Console Error Type
//!
//! Failures that end the console session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Customer mistakes            ──► printed, loop continues               │
//! │  (unknown command, bad number,                                          │
//! │   CoreError from the machine)                                           │
//! │                                                                         │
//! │  Console failures             ──► ConsoleError, session ends            │
//! │  (stdout closed, bad config,                                            │
//! │   status serialization)                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to render status: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
