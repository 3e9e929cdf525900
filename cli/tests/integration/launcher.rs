//! `TokioLauncher` against real processes.

#![cfg(unix)]
#![allow(clippy::expect_used, clippy::panic)]

use std::path::Path;
use std::time::{Duration, Instant};

use shortcut_hub::application::ports::ProcessLauncher;
use shortcut_hub::domain::{ExecutionOutcome, ResolvedCommand};
use shortcut_hub::infra::TokioLauncher;

fn sh(script: &str) -> ResolvedCommand {
    ResolvedCommand {
        program: "sh".to_string(),
        arguments: vec!["-c".to_string(), script.to_string()],
    }
}

const LONG: Duration = Duration::from_secs(10);

#[tokio::test]
async fn successful_exit_reports_stdout() {
    let result = TokioLauncher
        .execute(&sh("echo ok"), Path::new("/"), LONG)
        .await;

    assert_eq!(result.outcome, ExecutionOutcome::Success);
    let response = result.to_response();
    assert!(response.success);
    assert_eq!(response.output.as_deref(), Some("ok\n"));
    assert_eq!(response.exit_code, Some(0));
}

#[tokio::test]
async fn non_zero_exit_reports_code_and_stderr() {
    let result = TokioLauncher
        .execute(&sh("echo out; echo bad >&2; exit 3"), Path::new("/"), LONG)
        .await;

    assert_eq!(result.outcome, ExecutionOutcome::Failure);
    assert_eq!(result.exit_code, Some(3));
    assert_eq!(result.message, "Command failed with exit code 3");
    assert_eq!(result.output(), "bad\n");
    assert_eq!(result.stdout, "out\n");
}

#[tokio::test]
async fn missing_program_is_a_launch_error() {
    let cmd = ResolvedCommand {
        program: "definitely-not-a-real-program-7f3a".to_string(),
        arguments: Vec::new(),
    };
    let result = TokioLauncher.execute(&cmd, Path::new("/"), LONG).await;

    assert_eq!(result.outcome, ExecutionOutcome::LaunchError);
    assert!(result.message.starts_with("Failed to execute command:"));
    assert!(result.details.is_some());
}

#[tokio::test]
async fn missing_working_directory_is_a_launch_error() {
    let result = TokioLauncher
        .execute(&sh("true"), Path::new("/no/such/dir/for/shortcut-hub"), LONG)
        .await;
    assert_eq!(result.outcome, ExecutionOutcome::LaunchError);
}

#[tokio::test]
async fn runs_in_requested_working_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = TokioLauncher.execute(&sh("pwd"), dir.path(), LONG).await;

    let reported = result.stdout.trim_end();
    let expected = dir.path().canonicalize().expect("canonical");
    assert_eq!(Path::new(reported).canonicalize().expect("canonical"), expected);
}

#[tokio::test]
async fn never_ending_command_times_out_once() {
    let started = Instant::now();
    let result = TokioLauncher
        .execute(&sh("exec sleep 30"), Path::new("/"), Duration::from_millis(50))
        .await;
    let elapsed = started.elapsed();

    assert_eq!(result.outcome, ExecutionOutcome::TimedOut);
    assert_eq!(
        result.to_response().error.as_deref(),
        Some("Command timed out after 50ms")
    );
    assert!(elapsed < Duration::from_millis(200), "took {elapsed:?}");
}

#[tokio::test]
async fn timed_out_command_never_completes_later() {
    let dir = tempfile::tempdir().expect("tempdir");
    let marker = dir.path().join("finished");
    let script = format!("sleep 0.3; touch '{}'", marker.display());

    let result = TokioLauncher
        .execute(&sh(&script), Path::new("/"), Duration::from_millis(50))
        .await;
    assert_eq!(result.outcome, ExecutionOutcome::TimedOut);

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(!marker.exists(), "timed-out process kept running");
}

#[tokio::test]
async fn exit_racing_the_deadline_reports_exactly_one_outcome() {
    let timeout = Duration::from_millis(50);
    for _ in 0..20 {
        let result = TokioLauncher
            .execute(&sh("sleep 0.05"), Path::new("/"), timeout)
            .await;
        match result.outcome {
            ExecutionOutcome::Success => assert_eq!(result.exit_code, Some(0)),
            ExecutionOutcome::TimedOut => {
                assert_eq!(result.exit_code, None);
                assert_eq!(result.message, "Command timed out after 50ms");
            }
            other => panic!("unexpected outcome {other}"),
        }
    }
}

#[tokio::test]
async fn exit_is_reported_while_background_child_holds_pipes() {
    let started = Instant::now();
    let result = TokioLauncher
        .execute(&sh("sleep 3 & echo hi"), Path::new("/"), Duration::from_secs(1))
        .await;
    let elapsed = started.elapsed();

    assert_eq!(result.outcome, ExecutionOutcome::Success, "{}", result.message);
    assert_eq!(result.exit_code, Some(0));
    assert_eq!(result.stdout, "hi\n");
    assert!(elapsed < Duration::from_millis(800), "took {elapsed:?}");
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let fast = sh("echo fast");
    let slow = sh("exec sleep 30");
    let cwd = Path::new("/");

    let (a, b) = tokio::join!(
        TokioLauncher.execute(&fast, cwd, LONG),
        TokioLauncher.execute(&slow, cwd, Duration::from_millis(100)),
    );

    assert_eq!(a.outcome, ExecutionOutcome::Success);
    assert_eq!(a.stdout, "fast\n");
    assert_eq!(b.outcome, ExecutionOutcome::TimedOut);
}
