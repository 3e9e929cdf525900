//! Human-readable terminal renderer.

use std::path::Path;

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize as _;
use shortcut_common::{ShortcutRecord, SystemInfo};

use crate::domain::shortcut::group_by_category;
use crate::domain::{DispatchError, ExecutionResult, HubConfig, Platform, ResolvedCommand};
use crate::infra::config::CONFIG_ENV;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        println!("shortcut-hub {version}");
    }

    /// Render the outcome of one dispatched request.
    ///
    /// Captured stdout/stderr pass through untouched, even in quiet mode;
    /// only the status line is suppressed.
    pub fn render_result(&self, result: &ExecutionResult) {
        if !result.stdout.is_empty() {
            print!("{}", result.stdout);
        }
        if !result.stderr.is_empty() {
            eprint!("{}", result.stderr);
        }
        if result.is_success() {
            self.ctx.success(&result.message);
            return;
        }
        self.ctx.error(&result.message);
        if let Some(details) = &result.details
            && !self.ctx.quiet
        {
            eprintln!("    {}", details.style(self.ctx.styles.dim));
        }
    }

    /// Render a resolved command line.
    pub fn render_resolved(&self, command: &ResolvedCommand, platform: Platform) {
        if self.ctx.quiet {
            println!("{command}");
            return;
        }
        self.ctx.kv("Platform:", platform.as_str());
        self.ctx.kv("Program:", &command.program);
        self.ctx.kv("Arguments:", &format_arguments(&command.arguments));
        self.ctx.kv("Command:", &command.to_string());
    }

    /// Render a validator verdict.
    pub fn render_check(&self, target: &str, verdict: Result<(), &DispatchError>) {
        match verdict {
            Ok(()) => self.ctx.success(&format!("'{target}' is a valid target")),
            Err(e) => self.ctx.error(&e.to_string()),
        }
    }

    /// Render stored shortcuts grouped by category, in first-appearance order.
    pub fn render_shortcut_list(&self, records: &[ShortcutRecord]) {
        if records.is_empty() {
            if !self.ctx.quiet {
                println!("No shortcuts found. Add one: shortcut-hub shortcuts add --name <name> --target <target>");
            }
            return;
        }

        for (category, members) in group_by_category(records) {
            println!();
            println!("  {}", category.style(self.ctx.styles.header));
            for record in members {
                println!(
                    "    {:<18} {:<8} {}",
                    record.name.style(self.ctx.styles.bold),
                    record.kind.style(self.ctx.styles.kind),
                    format_target(record),
                );
                if !self.ctx.quiet {
                    println!(
                        "    {:<18} {}",
                        "",
                        format_meta(record).style(self.ctx.styles.dim)
                    );
                }
            }
        }
        println!();
    }

    /// Render a single shortcut after add or remove.
    pub fn render_shortcut(&self, action: &str, record: &ShortcutRecord) {
        self.ctx
            .success(&format!("{action} shortcut '{}' ({})", record.name, record.id));
        self.ctx.kv("Target:", &format_target(record));
        self.ctx.kv("Kind:", record.kind.as_str());
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &HubConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<24} {}", "server.listen_addr:", config.server.listen_addr);
        println!("  {:<24} {}", "execution.timeout_ms:", config.execution.timeout_ms);
        println!(
            "  {:<24} {}",
            "store.path:",
            config.store.path.as_deref().unwrap_or("(default)")
        );
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        println!(
            "    {:<22} {}",
            format!("{CONFIG_ENV}:"),
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| "(not set)".to_string())
        );
        println!(
            "    {:<22} {}",
            "RUST_LOG:",
            std::env::var("RUST_LOG").unwrap_or_else(|_| "(not set)".to_string())
        );
        println!();
    }

    /// Render host information.
    pub fn render_system_info(&self, info: &SystemInfo) {
        self.ctx.kv("Platform:", &info.platform);
        self.ctx.kv("Arch:", &info.arch);
        self.ctx.kv("Version:", &info.version);
        self.ctx.kv("Cwd:", &info.cwd);
    }
}

// ── Display helpers (used by tests and output layer) ─────────────────────────

/// Target plus parameters as the user typed them.
#[must_use]
pub fn format_target(record: &ShortcutRecord) -> String {
    if record.parameters.is_empty() {
        record.target.clone()
    } else {
        format!("{} {}", record.target, record.parameters)
    }
}

/// Id and last-used line shown under each listed shortcut.
#[must_use]
pub fn format_meta(record: &ShortcutRecord) -> String {
    format!("{}  last used: {}", record.id, format_last_used(record.last_used))
}

#[must_use]
pub fn format_last_used(last_used: Option<DateTime<Utc>>) -> String {
    last_used.map_or_else(
        || "never".to_string(),
        |at| at.format("%Y-%m-%d %H:%M").to_string(),
    )
}

#[must_use]
pub fn format_arguments(arguments: &[String]) -> String {
    if arguments.is_empty() {
        return "(none)".to_string();
    }
    arguments
        .iter()
        .map(|a| format!("{a:?}"))
        .collect::<Vec<_>>()
        .join(" ")
}
