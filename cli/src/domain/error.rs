//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Dispatch errors ───────────────────────────────────────────────────────────

/// Reasons a request is refused before anything is spawned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Target is required")]
    MissingTarget,

    #[error("Invalid target: {0}")]
    InvalidTarget(String),
}

// ── Shortcut errors ───────────────────────────────────────────────────────────

/// Errors related to stored shortcuts.
#[derive(Debug, Error)]
pub enum ShortcutError {
    #[error("Shortcut '{0}' not found. List shortcuts with: shortcut-hub shortcuts list")]
    NotFound(String),

    #[error("Shortcut name is required.")]
    MissingName,

    #[error("Shortcut '{name}' rejected: {source}")]
    InvalidTarget {
        name: String,
        #[source]
        source: DispatchError,
    },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
}
