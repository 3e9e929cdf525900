//! Application service — validate, resolve and launch one request.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All process I/O is routed through the injected `ProcessLauncher`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::ProcessLauncher;
use crate::domain::{
    DispatchError, ExecutionResult, Platform, ResolvedCommand, ShortcutRequest, check_target,
    resolve,
};

/// Per-dispatcher settings shared by every request it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSettings {
    /// Platform family used for resolution.
    pub platform: Platform,
    /// Working directory for requests that do not name one.
    pub default_cwd: PathBuf,
    /// Wall-clock budget per request.
    pub timeout: Duration,
}

impl DispatchSettings {
    /// Settings for the running host: current platform and process cwd.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn for_host(timeout: Duration) -> Result<Self> {
        let default_cwd = std::env::current_dir().context("cannot determine current directory")?;
        Ok(Self {
            platform: Platform::current(),
            default_cwd,
            timeout,
        })
    }
}

/// Validate and resolve a request without running it.
///
/// # Errors
///
/// Returns a `DispatchError` when the target is missing or malformed.
pub fn prepare(request: &ShortcutRequest, platform: Platform) -> Result<ResolvedCommand, DispatchError> {
    check_target(&request.target)?;
    Ok(resolve(request.kind, &request.target, &request.parameters, platform))
}

/// Working directory for `request`: its own when non-empty, else the default.
#[must_use]
pub fn working_dir<'a>(request: &'a ShortcutRequest, settings: &'a DispatchSettings) -> &'a Path {
    match request.working_directory.as_deref() {
        Some(dir) if !dir.is_empty() => Path::new(dir),
        _ => &settings.default_cwd,
    }
}

/// Run one request end to end and return its single terminal result.
///
/// Validation failures short-circuit with a `Rejected` result; the launcher
/// is never called for them.
pub async fn dispatch(
    launcher: &impl ProcessLauncher,
    request: &ShortcutRequest,
    settings: &DispatchSettings,
) -> ExecutionResult {
    let command = match prepare(request, settings.platform) {
        Ok(command) => command,
        Err(e) => {
            tracing::info!(shortcut = %request.target, kind = %request.kind, error = %e, "request rejected");
            return ExecutionResult::rejected(&e);
        }
    };
    let cwd = working_dir(request, settings);

    tracing::info!(kind = %request.kind, shortcut = %request.target, "dispatching");
    tracing::debug!(command = %command, cwd = %cwd.display(), "resolved");

    let result = launcher.execute(&command, cwd, settings.timeout).await;

    tracing::info!(
        outcome = %result.outcome,
        exit_code = ?result.exit_code,
        shortcut = %request.target,
        "finished"
    );
    result
}
