//! Command implementations

pub mod check;
pub mod config;
pub mod exec;
pub mod info;
pub mod resolve;
pub mod serve;
pub mod shortcuts;
pub mod version;

use std::process::ExitCode;

use crate::domain::{ExecutionOutcome, ExecutionResult};

/// Process exit code for a dispatched request.
///
/// `0` only on success. A child that exited non-zero passes its own code
/// through; every other failure maps to `1`.
#[must_use]
pub fn exit_code_for(result: &ExecutionResult) -> ExitCode {
    match (result.outcome, result.exit_code) {
        (ExecutionOutcome::Success, _) => ExitCode::SUCCESS,
        (ExecutionOutcome::Failure, Some(code)) => {
            u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
        }
        _ => ExitCode::FAILURE,
    }
}
