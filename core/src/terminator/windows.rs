//! Windows terminator: the platform's single kill primitive.
//!
//! Windows has no SIGTERM counterpart the target could handle here, so the
//! escalation path collapses to one forceful `taskkill /F` call with no
//! graceful phase, no wait, and no timer.

use tokio::process::Command;
use tracing::debug;

use super::Terminator;
use crate::error::{Error, Result};
use crate::models::Termination;

/// Process terminator backed by the `taskkill` utility.
#[derive(Debug, Default)]
pub struct TaskkillTerminator;

impl TaskkillTerminator {
    /// Create a new TaskkillTerminator instance.
    pub fn new() -> Self {
        Self
    }
}

impl Terminator for TaskkillTerminator {
    async fn terminate(&self, pid: u32) -> Result<Termination> {
        debug!(pid, "running taskkill /F");

        let output = Command::new("taskkill")
            .args(["/PID", &pid.to_string(), "/F"])
            .output()
            .await?;

        if output.status.success() {
            return Ok(Termination::Forced);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let combined = format!("{stdout} {stderr}");

        if combined.contains("not found") || combined.contains("could not be found") {
            return Err(Error::ProcessNotFound(pid));
        }
        if combined.contains("Access is denied") {
            return Err(Error::PermissionDenied(pid));
        }

        Err(Error::KillFailed {
            pid,
            reason: combined.trim().to_string(),
        })
    }
}
