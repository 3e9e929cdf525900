//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;
use shortcut_common::{ShortcutRecord, SystemInfo};

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

use crate::domain::{DispatchError, ExecutionResult, HubConfig, Platform, ResolvedCommand};

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {:<14}{value}", key.style(self.styles.dim));
        }
    }
}

/// Mode-dispatching renderer handed out by `AppContext::renderer`.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render the outcome of one dispatched request.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_result(&self, result: &ExecutionResult) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_result(result);
                Ok(())
            }
            Self::Json(r) => r.render_result(result),
        }
    }

    /// Render a resolved command line.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_resolved(&self, command: &ResolvedCommand, platform: Platform) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_resolved(command, platform);
                Ok(())
            }
            Self::Json(r) => r.render_resolved(command, platform),
        }
    }

    /// Render a validator verdict.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_check(&self, target: &str, verdict: Result<(), &DispatchError>) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_check(target, verdict);
                Ok(())
            }
            Self::Json(r) => r.render_check(target, verdict),
        }
    }

    /// Render stored shortcuts grouped by category.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_shortcut_list(&self, records: &[ShortcutRecord]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_shortcut_list(records);
                Ok(())
            }
            Self::Json(r) => r.render_shortcut_list(records),
        }
    }

    /// Render a single shortcut after add or remove.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_shortcut(&self, action: &str, record: &ShortcutRecord) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_shortcut(action, record);
                Ok(())
            }
            Self::Json(r) => r.render_shortcut(action, record),
        }
    }

    /// Render the current configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &HubConfig, path: &Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config, path);
                Ok(())
            }
            Self::Json(r) => r.render_config(config, path),
        }
    }

    /// Render host information.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_system_info(&self, info: &SystemInfo) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_system_info(info);
                Ok(())
            }
            Self::Json(r) => r.render_system_info(info),
        }
    }
}
