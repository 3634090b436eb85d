//! Configuration handling for the application.
//!
//! Plain environment-variable loading with development defaults. The
//! `Config::from_env` method is the single place validation would hook in if
//! a value ever needs more than simple string extraction.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Public so tests can refer to them.
pub const ENV_BIND_ADDR: &str = "PHISHGUARD_BIND_ADDR";
pub const ENV_MODEL_PATH: &str = "PHISHGUARD_MODEL_PATH";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MODEL_PATH: &str = "model/model.json";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    model_path: String,
}

impl Config {
    pub fn new(bind_addr: impl Into<String>, model_path: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            model_path: model_path.into(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let model_path =
            env::var(ENV_MODEL_PATH).unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string());
        Ok(Self {
            bind_addr,
            model_path,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    /// Path to the exported model parameters (JSON).
    pub fn model_path(&self) -> &str {
        &self.model_path
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reserved for future validation failures.
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
