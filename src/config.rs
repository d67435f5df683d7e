//! Static application configuration bundled into the client at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config.json` at the crate root carries the backend address, the scheme
//! name used for the `Authorization` header, and the application-variant
//! identifier. It is read once when `App` mounts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

const BUNDLED_CONFIG: &str = include_str!("../config.json");

/// Errors raised while loading `AppConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config field {0} must not be blank")]
    Blank(&'static str),
}

/// Typed view of `config.json`. Field names follow the upstream JSON keys.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Base URL of the backend service.
    #[serde(rename = "SERVER_ADDR")]
    pub server_addr: String,
    /// Scheme name placed before the token, e.g. `Bearer`.
    #[serde(rename = "AUTH_PREFIX")]
    pub auth_prefix: String,
    /// Application-variant identifier shown in the page chrome.
    #[serde(rename = "DISPLAY_NAME")]
    pub display_name: String,
}

impl AppConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON or missing keys, and
    /// `ConfigError::Blank` when `SERVER_ADDR` or `AUTH_PREFIX` is empty.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.server_addr.trim().is_empty() {
            return Err(ConfigError::Blank("SERVER_ADDR"));
        }
        if config.auth_prefix.trim().is_empty() {
            return Err(ConfigError::Blank("AUTH_PREFIX"));
        }
        Ok(config)
    }

    /// Load the config compiled in from `config.json`.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_json`].
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_CONFIG)
    }
}
