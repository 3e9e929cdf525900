//! Application service — shortcut list/add/edit/remove/run use-cases.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use anyhow::{Context, Result};
use chrono::Utc;
use shortcut_common::ShortcutRecord;

use crate::application::ports::{ProcessLauncher, ShortcutStore};
use crate::application::services::dispatch::{DispatchSettings, dispatch};
use crate::domain::shortcut::{find_by_id_or_name, generate_shortcut_id, matches_search};
use crate::domain::{ExecutionResult, NewShortcut, ShortcutError, ShortcutPatch};

/// List stored shortcuts, optionally filtered by a search term.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub async fn list(store: &impl ShortcutStore, search: Option<&str>) -> Result<Vec<ShortcutRecord>> {
    let records = store.load().await.context("loading shortcuts")?;
    Ok(match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(term) => records.into_iter().filter(|r| matches_search(r, term)).collect(),
        None => records,
    })
}

/// Look up one shortcut by id or name.
///
/// # Errors
///
/// Returns `ShortcutError::NotFound` if nothing matches, or a store error.
pub async fn find(store: &impl ShortcutStore, key: &str) -> Result<ShortcutRecord> {
    let records = store.load().await.context("loading shortcuts")?;
    find_by_id_or_name(&records, key)
        .cloned()
        .ok_or_else(|| ShortcutError::NotFound(key.to_string()).into())
}

/// Validate and append a new shortcut.
///
/// # Errors
///
/// Returns an error if validation fails or the store cannot be written.
pub async fn add(store: &impl ShortcutStore, new: NewShortcut) -> Result<ShortcutRecord> {
    let record = new.into_record(generate_shortcut_id(), Utc::now())?;
    let mut records = store.load().await.context("loading shortcuts")?;
    records.push(record.clone());
    store.save(&records).await.context("saving shortcuts")?;
    Ok(record)
}

/// Apply `patch` to a stored shortcut in place, keeping its position, id and
/// timestamps.
///
/// # Errors
///
/// Returns `ShortcutError::NotFound` if nothing matches, a validation error if
/// the patched record is invalid, or a store error. Nothing is saved on error.
pub async fn update(store: &impl ShortcutStore, key: &str, patch: ShortcutPatch) -> Result<ShortcutRecord> {
    let mut records = store.load().await.context("loading shortcuts")?;
    let index = find_by_id_or_name(&records, key)
        .and_then(|found| records.iter().position(|r| r.id == found.id))
        .ok_or_else(|| ShortcutError::NotFound(key.to_string()))?;

    let updated = patch.apply(&records[index])?;
    records[index] = updated.clone();
    store.save(&records).await.context("saving shortcuts")?;
    Ok(updated)
}

/// Remove a shortcut by id or name, returning the removed record.
///
/// # Errors
///
/// Returns `ShortcutError::NotFound` if nothing matches, or a store error.
pub async fn remove(store: &impl ShortcutStore, key: &str) -> Result<ShortcutRecord> {
    let mut records = store.load().await.context("loading shortcuts")?;
    let id = find_by_id_or_name(&records, key)
        .map(|r| r.id.clone())
        .ok_or_else(|| ShortcutError::NotFound(key.to_string()))?;
    let index = records
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| ShortcutError::NotFound(key.to_string()))?;
    let removed = records.remove(index);
    store.save(&records).await.context("saving shortcuts")?;
    Ok(removed)
}

/// Replace the whole stored list (bulk sync from a client).
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub async fn replace_all(store: &impl ShortcutStore, records: &[ShortcutRecord]) -> Result<()> {
    store.save(records).await.context("saving shortcuts")
}

/// Stamp `last_used` on a stored shortcut and return the updated record.
///
/// # Errors
///
/// Returns `ShortcutError::NotFound` if nothing matches, or a store error.
pub async fn touch(store: &impl ShortcutStore, key: &str) -> Result<ShortcutRecord> {
    let mut records = store.load().await.context("loading shortcuts")?;
    let id = find_by_id_or_name(&records, key)
        .map(|r| r.id.clone())
        .ok_or_else(|| ShortcutError::NotFound(key.to_string()))?;

    let mut used = None;
    for record in &mut records {
        if record.id == id {
            record.last_used = Some(Utc::now());
            used = Some(record.clone());
        }
    }
    let record = used.ok_or_else(|| ShortcutError::NotFound(key.to_string()))?;
    store.save(&records).await.context("saving shortcuts")?;
    Ok(record)
}

/// Stamp `last_used` on a stored shortcut and dispatch it.
///
/// The stamp is written before launching, so a shortcut that fails to start
/// still counts as used.
///
/// # Errors
///
/// Returns `ShortcutError::NotFound` or a store error. Execution failures are
/// reported inside the returned `ExecutionResult`, never as `Err`.
pub async fn run(
    store: &impl ShortcutStore,
    launcher: &impl ProcessLauncher,
    settings: &DispatchSettings,
    key: &str,
) -> Result<(ShortcutRecord, ExecutionResult)> {
    let record = touch(store, key).await?;
    let result = dispatch(launcher, &record.to_request(), settings).await;
    Ok((record, result))
}
