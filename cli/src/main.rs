//! shortcut-hub — shortcut launcher CLI and HTTP server

use std::process::ExitCode;

use clap::Parser;
use shortcut_hub::cli::Cli;
use shortcut_hub::output::json::{error_code, format_error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let json = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            if json && let Ok(out) = format_error(&format!("{e:#}"), error_code(&e)) {
                println!("{out}");
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
