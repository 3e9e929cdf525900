//! Shared mock infrastructure for unit tests.
//!
//! A recording launcher that never spawns anything and an in-memory shortcut
//! store, so service tests can count calls instead of touching the OS.

#![allow(clippy::expect_used, dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use shortcut_common::{ShortcutKind, ShortcutRecord};
use shortcut_hub::application::ports::{ConfigStore, ProcessLauncher, ShortcutStore};
use shortcut_hub::application::services::dispatch::DispatchSettings;
use shortcut_hub::domain::{ExecutionResult, HubConfig, Platform, ResolvedCommand};

// ── Launcher ──────────────────────────────────────────────────────────────────

/// One recorded `execute` call.
#[derive(Debug, Clone)]
pub struct LaunchCall {
    pub command: ResolvedCommand,
    pub working_dir: PathBuf,
    pub timeout: Duration,
}

/// Launcher that records calls and replies with a canned result.
pub struct RecordingLauncher {
    calls: Mutex<Vec<LaunchCall>>,
    reply: ExecutionResult,
}

impl RecordingLauncher {
    pub fn succeeding(stdout: &str) -> Self {
        Self::replying(ExecutionResult::from_exit(Some(0), stdout.as_bytes(), b""))
    }

    pub fn replying(reply: ExecutionResult) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply,
        }
    }

    /// Number of processes this launcher was asked to spawn.
    pub fn spawn_count(&self) -> usize {
        self.calls.lock().expect("lock").len()
    }

    pub fn calls(&self) -> Vec<LaunchCall> {
        self.calls.lock().expect("lock").clone()
    }
}

impl ProcessLauncher for RecordingLauncher {
    async fn execute(
        &self,
        command: &ResolvedCommand,
        working_dir: &Path,
        timeout: Duration,
    ) -> ExecutionResult {
        self.calls.lock().expect("lock").push(LaunchCall {
            command: command.clone(),
            working_dir: working_dir.to_path_buf(),
            timeout,
        });
        self.reply.clone()
    }
}

// ── Stores ────────────────────────────────────────────────────────────────────

/// In-memory `ShortcutStore`.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<ShortcutRecord>>,
    saves: AtomicUsize,
    fail_load: bool,
}

impl MemoryStore {
    pub fn with(records: Vec<ShortcutRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_load: true,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<ShortcutRecord> {
        self.records.lock().expect("lock").clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl ShortcutStore for MemoryStore {
    async fn load(&self) -> Result<Vec<ShortcutRecord>> {
        if self.fail_load {
            anyhow::bail!("store unavailable");
        }
        Ok(self.snapshot())
    }

    async fn save(&self, records: &[ShortcutRecord]) -> Result<()> {
        *self.records.lock().expect("lock") = records.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// In-memory `ConfigStore`.
#[derive(Default)]
pub struct MemoryConfigStore {
    config: Mutex<Option<HubConfig>>,
}

impl MemoryConfigStore {
    pub fn saved(&self) -> Option<HubConfig> {
        self.config.lock().expect("lock").clone()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<HubConfig> {
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, config: &HubConfig) -> Result<()> {
        *self.config.lock().expect("lock") = Some(config.clone());
        Ok(())
    }

    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("memory://config.yaml"))
    }
}

// ── Fixtures ──────────────────────────────────────────────────────────────────

pub fn record(id: &str, name: &str, category: &str) -> ShortcutRecord {
    ShortcutRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        target: "build.sh".to_string(),
        parameters: "--fast".to_string(),
        icon: String::new(),
        category: category.to_string(),
        kind: ShortcutKind::Script,
        working_directory: None,
        created_at: Utc::now(),
        last_used: None,
    }
}

pub fn linux_settings() -> DispatchSettings {
    DispatchSettings {
        platform: Platform::Linux,
        default_cwd: PathBuf::from("/srv/hub"),
        timeout: Duration::from_millis(30_000),
    }
}
