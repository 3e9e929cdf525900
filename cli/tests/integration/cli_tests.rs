//! Integration tests for the shortcut-hub CLI surface.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hub() -> (TempDir, Command) {
    let dir = TempDir::new().expect("temp dir");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("shortcut-hub"));
    cmd.env("NO_COLOR", "1")
        .env("SHORTCUT_HUB_CONFIG", dir.path().join("config.yaml"))
        .env_remove("RUST_LOG");
    (dir, cmd)
}

// --- Help and version ---

#[test]
fn test_cli_no_args_shows_help() {
    let (_dir, mut cmd) = hub();
    cmd.assert().code(2).stderr(predicate::str::contains(
        "Launch URLs, apps and scripts from saved shortcuts",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    let (_dir, mut cmd) = hub();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("exec"))
        .stdout(predicate::str::contains("shortcuts"));
}

#[test]
fn test_version_command() {
    let (_dir, mut cmd) = hub();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "shortcut-hub {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_json() {
    let (_dir, mut cmd) = hub();
    cmd.args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""version":"#));
}

// --- check ---

#[test]
fn test_check_accepts_bare_command() {
    let (_dir, mut cmd) = hub();
    cmd.args(["check", "notepad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid target"));
}

#[test]
fn test_check_rejects_relative_path_with_exit_1() {
    let (_dir, mut cmd) = hub();
    cmd.args(["check", "sub/dir/thing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid target: sub/dir/thing"));
}

#[test]
fn test_check_json_verdict() {
    let (_dir, mut cmd) = hub();
    cmd.args(["--json", "check", "../../etc"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""valid": false"#));
}

// --- resolve ---

#[test]
fn test_resolve_script_for_linux() {
    let (_dir, mut cmd) = hub();
    cmd.args([
        "--json", "resolve", "build.sh", "--kind", "script", "--params", "--fast", "--platform",
        "linux",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""program": "bash""#))
    .stdout(predicate::str::contains(r#""--fast""#));
}

#[test]
fn test_resolve_url_for_windows_keeps_url_whole() {
    let (_dir, mut cmd) = hub();
    cmd.args([
        "--json",
        "resolve",
        "https://example.com",
        "--kind",
        "url",
        "--params",
        "?x=1",
        "--platform",
        "windows",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""program": "cmd""#))
    .stdout(predicate::str::contains(r#""https://example.com?x=1""#));
}

#[test]
fn test_resolve_rejects_empty_target() {
    let (_dir, mut cmd) = hub();
    cmd.args(["resolve", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Target is required"));
}

#[test]
fn test_resolve_json_error_shape() {
    let (_dir, mut cmd) = hub();
    cmd.args(["--json", "resolve", "sub/dir/thing"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""code": "INVALID_TARGET""#));
}

// --- exec ---

#[cfg(unix)]
#[test]
fn test_exec_passes_stdout_through() {
    let (_dir, mut cmd) = hub();
    cmd.args(["exec", "echo", "--params", "hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world\n"));
}

#[cfg(unix)]
#[test]
fn test_exec_json_matches_api_shape() {
    let (_dir, mut cmd) = hub();
    cmd.args(["--json", "exec", "echo", "--params", "ok"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""success": true"#))
        .stdout(predicate::str::contains(r#""exitCode": 0"#));
}

#[cfg(unix)]
#[test]
fn test_exec_propagates_child_exit_code() {
    let (_dir, mut cmd) = hub();
    cmd.args(["exec", "false"]).assert().code(1);
}

#[cfg(unix)]
#[test]
fn test_exec_timeout() {
    let (_dir, mut cmd) = hub();
    cmd.args(["exec", "sleep", "--params", "30", "--timeout-ms", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Command timed out after 100ms"));
}

#[test]
fn test_exec_rejects_zero_timeout() {
    let (_dir, mut cmd) = hub();
    cmd.args(["exec", "echo", "--timeout-ms", "0"])
        .assert()
        .code(2);
}

// --- info ---

#[test]
fn test_info_json() {
    let (_dir, mut cmd) = hub();
    cmd.args(["--json", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""arch""#))
        .stdout(predicate::str::contains(r#""cwd""#));
}
