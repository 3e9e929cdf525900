//! Domain types and validators for shortcut-hub configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::execution::DEFAULT_TIMEOUT;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["server.listen_addr", "execution.timeout_ms", "store.path"];

/// Address the HTTP API binds to by default (loopback only).
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3001";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.shortcut-hub/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HubConfig {
    pub server: ServerConfig,
    pub execution: ExecutionConfig,
    pub store: StoreConfig,
}

/// HTTP API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

/// Launcher settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Per-request wall-clock budget in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Shortcut store settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the JSON shortcut file. `None` means `~/.shortcut-hub/shortcuts.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_timeout_ms() -> u64 {
    u64::try_from(DEFAULT_TIMEOUT.as_millis()).unwrap_or(30_000)
}

impl HubConfig {
    /// Execution timeout as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.execution.timeout_ms)
    }

    /// Read a setting by key, for display.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "server.listen_addr" => Some(self.server.listen_addr.clone()),
            "execution.timeout_ms" => Some(self.execution.timeout_ms.to_string()),
            "store.path" => self.store.path.clone(),
            _ => None,
        }
    }

    /// Validate and apply `key = value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid for it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "server.listen_addr" => self.server.listen_addr = value.to_string(),
            "execution.timeout_ms" => self.execution.timeout_ms = value.parse()?,
            "store.path" => self.store.path = Some(value.to_string()),
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let expected = match key {
        "server.listen_addr" if value.parse::<SocketAddr>().is_err() => {
            "Expected a socket address, e.g. 127.0.0.1:3001"
        }
        "execution.timeout_ms" if !value.parse::<u64>().is_ok_and(|ms| ms > 0) => {
            "Expected a positive number of milliseconds"
        }
        "store.path" if value.trim().is_empty() => "Expected a non-empty file path",
        _ => return Ok(()),
    };
    Err(ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
    .into())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
