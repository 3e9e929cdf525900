//! `shortcut-hub exec` — validate, resolve and run one target.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use shortcut_common::ShortcutKind;

use crate::app::AppContext;
use crate::application::services::dispatch::dispatch;
use crate::commands::exit_code_for;
use crate::domain::ShortcutRequest;
use crate::infra::TokioLauncher;
use crate::output::progress;

/// Arguments for the exec command.
#[derive(Args)]
pub struct ExecArgs {
    /// Program, script, path or URL to run
    pub target: String,

    /// Execution strategy
    #[arg(long, value_enum, default_value_t = ShortcutKind::System)]
    pub kind: ShortcutKind,

    /// Parameters appended to the target (split on whitespace)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub params: String,

    /// Working directory (default: current directory)
    #[arg(long)]
    pub cwd: Option<String>,

    /// Timeout in milliseconds (default: `execution.timeout_ms` from config)
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,
}

impl ExecArgs {
    fn to_request(&self) -> ShortcutRequest {
        ShortcutRequest {
            target: self.target.clone(),
            parameters: self.params.clone(),
            kind: self.kind,
            working_directory: self.cwd.clone(),
        }
    }
}

/// Run one target and report its result.
///
/// # Errors
///
/// Returns an error if configuration or the current directory cannot be
/// read. Execution failures are reported through the exit code.
pub async fn run(app: &AppContext, args: ExecArgs) -> Result<ExitCode> {
    let settings = app.dispatch_settings(args.timeout_ms)?;
    let request = args.to_request();

    let pb = progress::spinner_if(
        app.output.show_progress() && !app.is_json(),
        &format!("Running {}", request.target),
    );
    let result = dispatch(&TokioLauncher, &request, &settings).await;
    progress::finish_clear(&pb);

    app.renderer().render_result(&result)?;
    Ok(exit_code_for(&result))
}
