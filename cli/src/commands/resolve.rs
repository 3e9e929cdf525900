//! `shortcut-hub resolve` — show what a target would run as.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use shortcut_common::ShortcutKind;

use crate::app::AppContext;
use crate::application::services::dispatch::prepare;
use crate::domain::{Platform, ShortcutRequest};

/// Arguments for the resolve command.
#[derive(Args)]
pub struct ResolveArgs {
    /// Program, script, path or URL
    pub target: String,

    /// Execution strategy
    #[arg(long, value_enum, default_value_t = ShortcutKind::System)]
    pub kind: ShortcutKind,

    /// Parameters appended to the target (split on whitespace)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub params: String,

    /// Resolve for another platform family (default: this host)
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,
}

/// Print the resolved program and arguments.
///
/// # Errors
///
/// Returns an error if the target is rejected.
pub fn run(app: &AppContext, args: &ResolveArgs) -> Result<ExitCode> {
    let platform = args.platform.unwrap_or_else(Platform::current);
    let request = ShortcutRequest {
        target: args.target.clone(),
        parameters: args.params.clone(),
        kind: args.kind,
        working_directory: None,
    };
    let command = prepare(&request, platform)?;
    app.renderer().render_resolved(&command, platform)?;
    Ok(ExitCode::SUCCESS)
}
