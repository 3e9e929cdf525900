//! `shortcut-hub check` — run the target validator only.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::domain::check_target;

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Target to validate
    pub target: String,
}

/// Print the verdict; exit 1 when the target is rejected.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(app: &AppContext, args: &CheckArgs) -> Result<ExitCode> {
    let verdict = check_target(&args.target);
    app.renderer().render_check(&args.target, verdict.as_ref().map(|_| ()))?;
    Ok(if verdict.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
