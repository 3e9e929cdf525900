//! Application service — describe the host the dispatcher runs on.

use anyhow::{Context, Result};
use shortcut_common::SystemInfo;

use crate::domain::Platform;

/// Platform family, CPU architecture, crate version and working directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn system_info() -> Result<SystemInfo> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    Ok(SystemInfo {
        platform: Platform::current().to_string(),
        arch: std::env::consts::ARCH.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cwd: cwd.display().to_string(),
    })
}
