//! Unit tests for the shortcut CRUD service.

#![allow(clippy::expect_used)]

use shortcut_common::ShortcutKind;
use shortcut_hub::application::services::shortcut_crud;
use shortcut_hub::domain::{NewShortcut, ShortcutError, ShortcutPatch};

use crate::mocks::{MemoryStore, RecordingLauncher, linux_settings, record};

fn new_shortcut(name: &str, target: &str) -> NewShortcut {
    NewShortcut {
        name: name.to_string(),
        target: target.to_string(),
        category: "Dev".to_string(),
        kind: ShortcutKind::System,
        ..NewShortcut::default()
    }
}

#[tokio::test]
async fn list_filters_case_insensitively() {
    let store = MemoryStore::with(vec![
        record("sc-1", "Build", "Dev"),
        record("sc-2", "Docs", "Web"),
    ]);

    let all = shortcut_crud::list(&store, None).await.expect("list");
    assert_eq!(all.len(), 2);

    let web = shortcut_crud::list(&store, Some("WEB")).await.expect("list");
    assert_eq!(web.len(), 1);
    assert_eq!(web[0].id, "sc-2");

    let blank = shortcut_crud::list(&store, Some("  ")).await.expect("list");
    assert_eq!(blank.len(), 2);
}

#[tokio::test]
async fn list_propagates_store_errors() {
    let err = shortcut_crud::list(&MemoryStore::failing(), None)
        .await
        .expect_err("should fail");
    assert!(format!("{err:#}").contains("store unavailable"));
}

#[tokio::test]
async fn add_appends_validated_record() {
    let store = MemoryStore::with(vec![record("sc-1", "Build", "Dev")]);

    let added = shortcut_crud::add(&store, new_shortcut("  Editor ", "code"))
        .await
        .expect("add");

    assert_eq!(added.name, "Editor");
    assert!(added.id.starts_with("sc-"));
    let stored = store.snapshot();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[1].id, added.id);
}

#[tokio::test]
async fn add_rejects_invalid_target_without_saving() {
    let store = MemoryStore::default();

    let err = shortcut_crud::add(&store, new_shortcut("Bad", "sub/dir/thing"))
        .await
        .expect_err("should fail");

    assert!(matches!(
        err.downcast_ref::<ShortcutError>(),
        Some(ShortcutError::InvalidTarget { .. })
    ));
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn update_keeps_id_position_and_timestamps() {
    let mut used = record("sc-2", "Docs", "Web");
    used.last_used = Some(chrono::Utc::now());
    let store = MemoryStore::with(vec![record("sc-1", "Build", "Dev"), used.clone()]);

    let patch = ShortcutPatch {
        target: Some("https://example.com/docs".to_string()),
        kind: Some(ShortcutKind::Url),
        ..ShortcutPatch::default()
    };
    let updated = shortcut_crud::update(&store, "docs", patch).await.expect("update");

    assert_eq!(updated.id, "sc-2");
    assert_eq!(updated.kind, ShortcutKind::Url);
    assert_eq!(updated.created_at, used.created_at);
    assert_eq!(updated.last_used, used.last_used);
    let stored = store.snapshot();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[1], updated);
    assert_eq!(stored[0].id, "sc-1");
}

#[tokio::test]
async fn update_rejects_invalid_target_without_saving() {
    let store = MemoryStore::with(vec![record("sc-1", "Build", "Dev")]);
    let patch = ShortcutPatch {
        target: Some("sub/dir/thing".to_string()),
        ..ShortcutPatch::default()
    };

    let err = shortcut_crud::update(&store, "sc-1", patch)
        .await
        .expect_err("should fail");

    assert!(matches!(
        err.downcast_ref::<ShortcutError>(),
        Some(ShortcutError::InvalidTarget { .. })
    ));
    assert_eq!(store.save_count(), 0);
    assert_eq!(store.snapshot()[0].target, "build.sh");
}

#[tokio::test]
async fn update_unknown_is_not_found() {
    let store = MemoryStore::default();
    let err = shortcut_crud::update(&store, "missing", ShortcutPatch::default())
        .await
        .expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<ShortcutError>(),
        Some(ShortcutError::NotFound(_))
    ));
}

#[tokio::test]
async fn remove_by_name_keeps_other_records_in_order() {
    let store = MemoryStore::with(vec![
        record("sc-1", "A", "Dev"),
        record("sc-2", "B", "Dev"),
        record("sc-3", "C", "Dev"),
    ]);

    let removed = shortcut_crud::remove(&store, "B").await.expect("remove");

    assert_eq!(removed.id, "sc-2");
    let ids: Vec<_> = store.snapshot().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["sc-1", "sc-3"]);
}

#[tokio::test]
async fn remove_unknown_is_not_found() {
    let store = MemoryStore::with(vec![record("sc-1", "A", "Dev")]);
    let err = shortcut_crud::remove(&store, "missing")
        .await
        .expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<ShortcutError>(),
        Some(ShortcutError::NotFound(_))
    ));
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn run_stamps_last_used_and_dispatches() {
    let store = MemoryStore::with(vec![record("sc-1", "Build", "Dev")]);
    let launcher = RecordingLauncher::succeeding("ok\n");

    let (used, result) = shortcut_crud::run(&store, &launcher, &linux_settings(), "sc-1")
        .await
        .expect("run");

    assert!(result.is_success());
    assert!(used.last_used.is_some());
    assert_eq!(store.snapshot()[0].last_used, used.last_used);
    assert_eq!(launcher.calls()[0].command.program, "bash");
}

#[tokio::test]
async fn run_unknown_never_spawns() {
    let store = MemoryStore::default();
    let launcher = RecordingLauncher::succeeding("");

    let result = shortcut_crud::run(&store, &launcher, &linux_settings(), "nope").await;

    assert!(result.is_err());
    assert_eq!(launcher.spawn_count(), 0);
}

#[tokio::test]
async fn replace_all_overwrites_store() {
    let store = MemoryStore::with(vec![record("sc-1", "A", "Dev")]);
    shortcut_crud::replace_all(&store, &[record("sc-9", "Z", "Web")])
        .await
        .expect("replace");
    let ids: Vec<_> = store.snapshot().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["sc-9"]);
}
