//! Unit tests for the dispatch service.
//!
//! The launcher is a recording mock: these tests prove what is (and is not)
//! handed to the OS without spawning anything.

#![allow(clippy::expect_used)]

use std::path::Path;
use std::time::Duration;

use shortcut_common::ShortcutKind;
use shortcut_hub::application::services::dispatch::{dispatch, prepare, working_dir};
use shortcut_hub::domain::{
    DispatchError, ErrorClass, ExecutionOutcome, ExecutionResult, Platform, ShortcutRequest,
};

use crate::mocks::{RecordingLauncher, linux_settings};

fn request(kind: ShortcutKind, target: &str, parameters: &str) -> ShortcutRequest {
    ShortcutRequest {
        target: target.to_string(),
        parameters: parameters.to_string(),
        kind,
        working_directory: None,
    }
}

#[tokio::test]
async fn empty_target_is_rejected_without_spawning() {
    let launcher = RecordingLauncher::succeeding("");
    let result = dispatch(&launcher, &request(ShortcutKind::System, "", ""), &linux_settings()).await;

    assert_eq!(launcher.spawn_count(), 0);
    assert_eq!(result.outcome, ExecutionOutcome::Rejected);
    assert_eq!(result.error_class(), Some(ErrorClass::Validation));
    let response = result.to_response();
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Target is required"));
}

#[tokio::test]
async fn malformed_target_is_rejected_without_spawning() {
    let launcher = RecordingLauncher::succeeding("");
    let result = dispatch(
        &launcher,
        &request(ShortcutKind::System, "sub/dir/thing", ""),
        &linux_settings(),
    )
    .await;

    assert_eq!(launcher.spawn_count(), 0);
    assert_eq!(result.message, "Invalid target: sub/dir/thing");
}

#[tokio::test]
async fn script_resolves_to_interpreter_with_split_parameters() {
    let launcher = RecordingLauncher::succeeding("built\n");
    let result = dispatch(
        &launcher,
        &request(ShortcutKind::Script, "build.sh", "--fast  --verbose"),
        &linux_settings(),
    )
    .await;

    assert!(result.is_success());
    let calls = launcher.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].command.program, "bash");
    assert_eq!(calls[0].command.arguments, ["build.sh", "--fast", "--verbose"]);
}

#[tokio::test]
async fn default_cwd_and_timeout_are_passed_to_launcher() {
    let launcher = RecordingLauncher::succeeding("");
    let mut settings = linux_settings();
    settings.timeout = Duration::from_millis(1_234);

    dispatch(&launcher, &request(ShortcutKind::System, "ls", "-la"), &settings).await;

    let calls = launcher.calls();
    let call = &calls[0];
    assert_eq!(call.working_dir, Path::new("/srv/hub"));
    assert_eq!(call.timeout, Duration::from_millis(1_234));
}

#[tokio::test]
async fn request_working_directory_overrides_default() {
    let launcher = RecordingLauncher::succeeding("");
    let mut req = request(ShortcutKind::System, "ls", "");
    req.working_directory = Some("/tmp/project".to_string());

    dispatch(&launcher, &req, &linux_settings()).await;

    assert_eq!(launcher.calls()[0].working_dir, Path::new("/tmp/project"));
}

#[test]
fn empty_working_directory_falls_back_to_default() {
    let settings = linux_settings();
    let mut req = request(ShortcutKind::System, "ls", "");
    req.working_directory = Some(String::new());
    assert_eq!(working_dir(&req, &settings), Path::new("/srv/hub"));
}

#[tokio::test]
async fn launcher_result_is_returned_unchanged() {
    let reply = ExecutionResult::timed_out(Duration::from_millis(50));
    let launcher = RecordingLauncher::replying(reply.clone());

    let result = dispatch(&launcher, &request(ShortcutKind::System, "yes", ""), &linux_settings()).await;

    assert_eq!(result, reply);
    assert_eq!(
        result.to_response().error.as_deref(),
        Some("Command timed out after 50ms")
    );
}

#[test]
fn prepare_url_on_windows_uses_start_with_empty_title() {
    let cmd = prepare(
        &request(ShortcutKind::Url, "https://example.com", "?x=1"),
        Platform::Windows,
    )
    .expect("valid");
    assert_eq!(cmd.program, "cmd");
    assert_eq!(cmd.arguments, ["/c", "start", "", "https://example.com?x=1"]);
}

#[test]
fn prepare_reports_missing_target() {
    assert_eq!(
        prepare(&request(ShortcutKind::Url, "", ""), Platform::Linux),
        Err(DispatchError::MissingTarget)
    );
}
