//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use shortcut_common::ShortcutRecord;

use crate::domain::{ExecutionResult, HubConfig, ResolvedCommand};

// ── Process Launcher Port ─────────────────────────────────────────────────────

/// Runs a resolved command and reports exactly one terminal result.
#[allow(async_fn_in_trait)]
pub trait ProcessLauncher {
    /// Spawn `command` in `working_dir` and wait for whichever comes first:
    /// exit, launch/runtime error, or `timeout`.
    ///
    /// Never fails: every failure mode is an `ExecutionResult` outcome.
    async fn execute(
        &self,
        command: &ResolvedCommand,
        working_dir: &Path,
        timeout: Duration,
    ) -> ExecutionResult;
}

// ── Persistence Ports ─────────────────────────────────────────────────────────

/// Durable ordered list of shortcut records.
#[allow(async_fn_in_trait)]
pub trait ShortcutStore {
    /// Load every record, in stored order. A missing store is an empty list.
    async fn load(&self) -> Result<Vec<ShortcutRecord>>;
    /// Replace the stored list.
    async fn save(&self, records: &[ShortcutRecord]) -> Result<()>;
}

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load configuration, falling back to defaults when no file exists.
    fn load(&self) -> Result<HubConfig>;
    /// Persist configuration.
    fn save(&self, config: &HubConfig) -> Result<()>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}
