//! JSON output helpers.
//!
//! `JsonRenderer` prints one pretty-printed document per command on stdout.
//! `format_error` builds the error object printed when a command fails in
//! `--json` mode.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use shortcut_common::{ShortcutRecord, SystemInfo};

use crate::domain::{
    ConfigError, DispatchError, ExecutionResult, HubConfig, Platform, ResolvedCommand,
    ShortcutError,
};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Machine-readable code for a command failure.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<ShortcutError>() {
        return match e {
            ShortcutError::NotFound(_) => "SHORTCUT_NOT_FOUND",
            ShortcutError::MissingName | ShortcutError::InvalidTarget { .. } => "INVALID_SHORTCUT",
        };
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return "INVALID_CONFIG";
    }
    if err.downcast_ref::<DispatchError>().is_some() {
        return "INVALID_TARGET";
    }
    "ERROR"
}

fn print<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}

/// Renders domain types as JSON documents on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Same shape the HTTP API returns.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_result(&self, result: &ExecutionResult) -> Result<()> {
        print(&result.to_response())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_resolved(&self, command: &ResolvedCommand, platform: Platform) -> Result<()> {
        print(&json!({
            "platform": platform.as_str(),
            "program": command.program,
            "arguments": command.arguments,
        }))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_check(&self, target: &str, verdict: Result<(), &DispatchError>) -> Result<()> {
        let value = match verdict {
            Ok(()) => json!({ "target": target, "valid": true }),
            Err(e) => json!({ "target": target, "valid": false, "error": e.to_string() }),
        };
        print(&value)
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_shortcut_list(&self, records: &[ShortcutRecord]) -> Result<()> {
        print(&json!({ "shortcuts": records }))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_shortcut(&self, action: &str, record: &ShortcutRecord) -> Result<()> {
        print(&json!({ "action": action, "shortcut": record }))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &HubConfig, path: &Path) -> Result<()> {
        print(&json!({ "path": path.display().to_string(), "config": config }))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_system_info(&self, info: &SystemInfo) -> Result<()> {
        print(info)
    }
}
