use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::errors::DiagnosticsError;
use crate::model::CommandCapture;

/// Run an external command and capture its output as a single blob.
///
/// stderr is appended to stdout: downstream consumers treat the capture as
/// one human-readable text, and tool errors ("ping: unknown host") are
/// useful context there. The child is killed if the deadline lapses before
/// it exits.
pub async fn run(
    program: &str,
    args: &[&str],
    deadline: Duration,
) -> Result<CommandCapture, DiagnosticsError> {
    debug!(program, ?args, "spawning");

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| DiagnosticsError::Probe(e.to_string()))?;

    // wait_with_output reads both pipes to EOF before reaping the child;
    // on timeout the future is dropped and kill_on_drop reaps it for us
    let output = timeout(deadline, child.wait_with_output())
        .await
        .map_err(|_| DiagnosticsError::Probe("timeout".to_string()))?
        .map_err(|e| DiagnosticsError::Probe(e.to_string()))?;

    let mut merged = String::from_utf8_lossy(&output.stdout).into_owned();
    merged.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(CommandCapture {
        exit_code: output.status.code().unwrap_or(-1),
        output: merged,
    })
}
