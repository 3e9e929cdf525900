//! Version command

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::output::HumanRenderer;

/// Run the version command.
///
/// # Errors
///
/// This function currently never fails.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let version = env!("CARGO_PKG_VERSION");

    if app.is_json() {
        println!(r#"{{"version":"{version}"}}"#);
    } else {
        HumanRenderer::new(&app.output).render_version(version);
    }
    Ok(ExitCode::SUCCESS)
}
