//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Launch URLs, apps and scripts from saved shortcuts
#[derive(Parser)]
#[command(
    name = "shortcut-hub",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve(commands::serve::ServeArgs),

    /// Run a target once
    Exec(commands::exec::ExecArgs),

    /// Show the command a target resolves to, without running it
    Resolve(commands::resolve::ResolveArgs),

    /// Check whether a target is accepted
    Check(commands::check::CheckArgs),

    /// Manage saved shortcuts
    #[command(subcommand)]
    Shortcuts(commands::shortcuts::ShortcutsCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show host information
    Info,

    /// Show version
    Version,
}

impl Cli {
    /// Default tracing filter when `RUST_LOG` is unset.
    ///
    /// The server logs its lifecycle; one-shot commands keep stderr quiet.
    #[must_use]
    pub fn default_log_filter(&self) -> &'static str {
        match self.command {
            Command::Serve(_) => "info",
            _ => "warn",
        }
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            no_color,
            quiet,
            json,
            command,
        } = self;
        let app = AppContext::new(&AppFlags {
            no_color,
            quiet,
            json,
        });

        match command {
            Command::Serve(args) => commands::serve::run(&app, args).await,
            Command::Exec(args) => commands::exec::run(&app, args).await,
            Command::Resolve(args) => commands::resolve::run(&app, &args),
            Command::Check(args) => commands::check::run(&app, &args),
            Command::Shortcuts(cmd) => commands::shortcuts::run(&app, cmd).await,
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Info => commands::info::run(&app),
            Command::Version => commands::version::run(&app),
        }
    }
}
