//! Infrastructure implementation of the `ShortcutStore` port.
//!
//! `JsonShortcutStore` keeps the whole list as one pretty-printed JSON array.
//! Reads and writes run on the blocking pool; writes go through a temp file
//! and a rename so a crash never leaves a half-written list behind.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use shortcut_common::ShortcutRecord;

use crate::application::ports::ShortcutStore;
use crate::domain::HubConfig;

/// Shortcut list file manager.
#[derive(Debug, Clone)]
pub struct JsonShortcutStore {
    path: PathBuf,
}

impl JsonShortcutStore {
    /// Store at the default path (`~/.shortcut-hub/shortcuts.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(Self::with_path(home.join(".shortcut-hub").join("shortcuts.json")))
    }

    /// Store with an explicit path.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at `store.path` when configured, else the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is configured and the home directory
    /// cannot be determined.
    pub fn from_config(config: &HubConfig) -> Result<Self> {
        match config.store.path.as_deref() {
            Some(path) if !path.trim().is_empty() => Ok(Self::with_path(PathBuf::from(path))),
            _ => Self::new(),
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_sync(&self) -> Result<Vec<ShortcutRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading shortcuts file {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("parsing shortcuts file {}", self.path.display()))
    }

    fn save_sync(&self, records: &[ShortcutRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(records).context("serializing shortcuts")?;

        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content)
            .with_context(|| format!("writing temp file {}", temp_path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&temp_path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("setting permissions on {}", temp_path.display()))?;
        }

        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("finalizing shortcuts file {}", self.path.display()))?;
        Ok(())
    }
}

impl ShortcutStore for JsonShortcutStore {
    async fn load(&self) -> Result<Vec<ShortcutRecord>> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.load_sync())
            .await
            .context("shortcut load task panicked")?
    }

    async fn save(&self, records: &[ShortcutRecord]) -> Result<()> {
        let store = self.clone();
        let records = records.to_vec();
        tokio::task::spawn_blocking(move || store.save_sync(&records))
            .await
            .context("shortcut save task panicked")?
    }
}
