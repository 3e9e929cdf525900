//! Application context — unified state passed to every command handler.
//!
//! `AppContext` bundles the output context, rendering mode, configuration
//! store and interactivity flag so command signatures stay `(&AppContext, args)`.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::application::services::dispatch::DispatchSettings;
use crate::domain::HubConfig;
use crate::infra::{JsonShortcutStore, YamlConfigStore};
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Environment variable that skips confirmation prompts.
pub const YES_ENV: &str = "SHORTCUT_HUB_YES";

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// YAML configuration store.
    pub config_store: YamlConfigStore,
    /// When `true`, skip interactive prompts and use defaults.
    ///
    /// Set when the `CI` or `SHORTCUT_HUB_YES` environment variables are present.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        let non_interactive = std::env::var("CI").is_ok() || std::env::var(YES_ENV).is_ok();

        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            config_store: YamlConfigStore::new(),
            non_interactive,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Load the current configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn config(&self) -> Result<HubConfig> {
        self.config_store.load()
    }

    /// Shortcut store at the configured location.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or no store
    /// location can be determined.
    pub fn shortcut_store(&self) -> Result<JsonShortcutStore> {
        JsonShortcutStore::from_config(&self.config()?)
    }

    /// Dispatch settings for this host, with an optional timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the current
    /// directory is unavailable.
    pub fn dispatch_settings(&self, timeout_ms: Option<u64>) -> Result<DispatchSettings> {
        let config = self.config()?;
        let timeout = timeout_ms.map_or_else(|| config.timeout(), std::time::Duration::from_millis);
        DispatchSettings::for_host(timeout)
    }

    /// Ask the user for confirmation.
    ///
    /// When `non_interactive` is `true` (CI or `SHORTCUT_HUB_YES`), returns
    /// `default` immediately without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}
