//! Execution results and their mapping to the wire response.
//!
//! Pure data — the launcher in `crate::infra` produces these, the API and CLI
//! render them.

use std::fmt;
use std::time::Duration;

use shortcut_common::ExecuteResponse;

use crate::domain::error::DispatchError;

/// Wall-clock budget for a single execution when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Terminal state of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Exited with code 0.
    Success,
    /// Exited non-zero, or was terminated by a signal.
    Failure,
    /// Deadline expired first; the process was killed best-effort.
    TimedOut,
    /// The process could not be started or waited on.
    LaunchError,
    /// Refused by validation before anything was spawned.
    Rejected,
}

/// Caller-facing error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Validation,
    Launch,
    Runtime,
    Timeout,
}

impl fmt::Display for ExecutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::TimedOut => "timed-out",
            Self::LaunchError => "launch-error",
            Self::Rejected => "rejected",
        })
    }
}

/// The single terminal report for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub outcome: ExecutionOutcome,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub message: String,
    pub details: Option<String>,
}

impl ExecutionResult {
    /// Result for a process that ran to completion.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    #[must_use]
    pub fn from_exit(code: Option<i32>, stdout: &[u8], stderr: &[u8]) -> Self {
        let (outcome, message) = match code {
            Some(0) => (ExecutionOutcome::Success, "Command executed successfully".to_string()),
            Some(code) => (
                ExecutionOutcome::Failure,
                format!("Command failed with exit code {code}"),
            ),
            None => (
                ExecutionOutcome::Failure,
                "Command terminated without an exit code".to_string(),
            ),
        };
        Self {
            outcome,
            exit_code: code,
            stdout: String::from_utf8_lossy(stdout).into_owned(),
            stderr: String::from_utf8_lossy(stderr).into_owned(),
            message,
            details: None,
        }
    }

    /// Result for a process that could not be started or waited on.
    #[must_use]
    pub fn launch_error(description: impl fmt::Display, details: Option<String>) -> Self {
        Self {
            outcome: ExecutionOutcome::LaunchError,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            message: format!("Failed to execute command: {description}"),
            details,
        }
    }

    /// Result for a process that outlived its deadline.
    #[must_use]
    pub fn timed_out(timeout: Duration) -> Self {
        Self {
            outcome: ExecutionOutcome::TimedOut,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            message: format!("Command timed out after {}ms", timeout.as_millis()),
            details: None,
        }
    }

    /// Result for a request refused before spawning.
    #[must_use]
    pub fn rejected(error: &DispatchError) -> Self {
        Self {
            outcome: ExecutionOutcome::Rejected,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            message: error.to_string(),
            details: None,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == ExecutionOutcome::Success
    }

    /// `None` on success, otherwise the error class callers branch on.
    #[must_use]
    pub fn error_class(&self) -> Option<ErrorClass> {
        match self.outcome {
            ExecutionOutcome::Success => None,
            ExecutionOutcome::Failure => Some(ErrorClass::Runtime),
            ExecutionOutcome::TimedOut => Some(ErrorClass::Timeout),
            ExecutionOutcome::LaunchError => Some(ErrorClass::Launch),
            ExecutionOutcome::Rejected => Some(ErrorClass::Validation),
        }
    }

    /// Output shown to the caller: stdout on success, otherwise stderr with
    /// stdout as the fallback when stderr is empty.
    #[must_use]
    pub fn output(&self) -> &str {
        match self.outcome {
            ExecutionOutcome::Success => &self.stdout,
            _ if self.stderr.is_empty() => &self.stdout,
            _ => &self.stderr,
        }
    }

    /// Wire representation.
    #[must_use]
    pub fn to_response(&self) -> ExecuteResponse {
        match self.outcome {
            ExecutionOutcome::Success => ExecuteResponse {
                success: true,
                message: Some(self.message.clone()),
                output: Some(self.stdout.clone()),
                exit_code: self.exit_code,
                ..ExecuteResponse::default()
            },
            ExecutionOutcome::Failure => ExecuteResponse {
                success: false,
                error: Some(self.message.clone()),
                output: Some(self.output().to_string()),
                exit_code: self.exit_code,
                ..ExecuteResponse::default()
            },
            ExecutionOutcome::TimedOut
            | ExecutionOutcome::LaunchError
            | ExecutionOutcome::Rejected => ExecuteResponse {
                success: false,
                error: Some(self.message.clone()),
                details: self.details.clone(),
                ..ExecuteResponse::default()
            },
        }
    }
}
