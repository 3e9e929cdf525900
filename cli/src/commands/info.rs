//! `shortcut-hub info` — describe the host.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::system_info::system_info;

/// Print platform, architecture, version and working directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    app.renderer().render_system_info(&system_info()?)?;
    Ok(ExitCode::SUCCESS)
}
