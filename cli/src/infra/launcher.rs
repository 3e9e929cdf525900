//! Infrastructure implementation of the `ProcessLauncher` port.
//!
//! `TokioLauncher` spawns the child with stdin closed and both output streams
//! piped, then lets three sources race for the [`Finalizer`]: the watcher task
//! (natural exit or wait error), the spawn itself (launch error) and the
//! deadline task. Whoever wins reports; the caller never waits for the loser.
//!
//! Exit is decided by the child's own status, not by its pipes closing, so a
//! child that leaves a background process behind still reports its exit.

use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;
use tokio::sync::oneshot;

use crate::application::ports::ProcessLauncher;
use crate::domain::{ExecutionResult, ResolvedCommand};
use crate::infra::finalize::Finalizer;

/// Production `ProcessLauncher` backed by `tokio::process`.
///
/// Stateless: concurrent calls share nothing, each gets its own child,
/// watcher task, deadline task and latch.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioLauncher;

impl ProcessLauncher for TokioLauncher {
    async fn execute(
        &self,
        command: &ResolvedCommand,
        working_dir: &Path,
        timeout: Duration,
    ) -> ExecutionResult {
        let (finalizer, result_rx) = Finalizer::new();

        let spawned = tokio::process::Command::new(&command.program)
            .args(&command.arguments)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let child = match spawned {
            Ok(child) => child,
            Err(e) => {
                finalizer.finalize(ExecutionResult::launch_error(&e, Some(format!("{e:?}"))));
                return receive(result_rx).await;
            }
        };
        tracing::debug!(program = %command.program, pid = ?child.id(), "spawned");

        let (kill_tx, kill_rx) = oneshot::channel();
        tokio::spawn(watch(
            child,
            kill_rx,
            Arc::clone(&finalizer),
            command.program.clone(),
        ));
        let deadline = tokio::spawn(deadline(timeout, kill_tx, Arc::clone(&finalizer)));

        let result = receive(result_rx).await;
        deadline.abort();
        result
    }
}

/// Await the winning result. A dropped sender means every source died
/// without reporting, which is surfaced as a launch error.
async fn receive(rx: oneshot::Receiver<ExecutionResult>) -> ExecutionResult {
    rx.await.unwrap_or_else(|_| {
        ExecutionResult::launch_error("launcher stopped before reporting a result", None)
    })
}

/// How long output is still collected after the child exits. A background
/// process the child started can hold the pipes open indefinitely.
const OUTPUT_GRACE: Duration = Duration::from_millis(100);

/// Exit/error source. Collects output while the child runs, or kills it when
/// the deadline source asks to.
async fn watch(
    mut child: Child,
    mut kill_rx: oneshot::Receiver<()>,
    finalizer: Arc<Finalizer<ExecutionResult>>,
    program: String,
) {
    let mut stdout_handle = child.stdout.take();
    let mut stderr_handle = child.stderr.take();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    let status = {
        let collect = async {
            tokio::join!(
                read_into(stdout_handle.as_mut(), &mut stdout, &program),
                read_into(stderr_handle.as_mut(), &mut stderr, &program),
            )
        };
        tokio::pin!(collect);
        let mut collected = false;
        let mut kill_closed = false;

        let status = loop {
            tokio::select! {
                status = child.wait() => break status,
                _ = &mut collect, if !collected => collected = true,
                killed = &mut kill_rx, if !kill_closed => {
                    if killed.is_err() {
                        kill_closed = true;
                        continue;
                    }
                    if let Err(e) = child.kill().await {
                        tracing::warn!(%program, error = %e, "failed to terminate timed-out process");
                    }
                    return;
                }
            }
        };

        if finalizer.is_finalized() {
            tracing::debug!(%program, "completion after deadline discarded");
            return;
        }
        if !collected && tokio::time::timeout(OUTPUT_GRACE, &mut collect).await.is_err() {
            tracing::debug!(%program, "output pipes still open after exit, keeping what was read");
        }
        status
    };

    let result = match status {
        Ok(status) => ExecutionResult::from_exit(status.code(), &stdout, &stderr),
        Err(e) => ExecutionResult::launch_error(&e, Some(format!("{e:?}"))),
    };
    if !finalizer.finalize(result) {
        tracing::debug!(%program, "completion after deadline discarded");
    }
}

/// Deadline source. Only the winner asks the watcher to kill the child.
async fn deadline(
    timeout: Duration,
    kill_tx: oneshot::Sender<()>,
    finalizer: Arc<Finalizer<ExecutionResult>>,
) {
    tokio::time::sleep(timeout).await;
    if finalizer.finalize(ExecutionResult::timed_out(timeout)) {
        tracing::debug!(timeout_ms = %timeout.as_millis(), "deadline reached, killing process");
        // Watcher may already be gone; termination is best-effort.
        let _ = kill_tx.send(());
    }
}

async fn read_into<R: AsyncRead + Unpin>(handle: Option<&mut R>, buf: &mut Vec<u8>, program: &str) {
    if let Some(h) = handle
        && let Err(e) = h.read_to_end(buf).await
    {
        tracing::debug!(%program, error = %e, "failed to read process output");
    }
}
