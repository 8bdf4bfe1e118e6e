//! Unix terminator: SIGTERM, bounded wait, SIGKILL.

use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use tokio::time::{sleep, timeout, Duration};
use tracing::{debug, warn};

use super::{Terminator, GRACE_PERIOD};
use crate::error::{Error, Result};
use crate::models::Termination;

/// Interval between liveness probes while waiting out the grace period.
const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Signal-based process terminator.
#[derive(Debug, Default)]
pub struct SignalTerminator;

impl SignalTerminator {
    /// Create a new SignalTerminator instance.
    pub fn new() -> Self {
        Self
    }
}

/// Signal-0 probe: delivers nothing, reports whether the PID is live.
///
/// An unreaped zombie still counts as live; callers killing their own
/// children must reap them for the exit to become observable.
fn alive(pid: Pid) -> bool {
    kill(pid, None).is_ok()
}

/// Resolves once the process is gone from the process table.
async fn exited(pid: Pid) {
    while alive(pid) {
        sleep(EXIT_POLL_INTERVAL).await;
    }
}

impl Terminator for SignalTerminator {
    async fn terminate(&self, pid: u32) -> Result<Termination> {
        let target = Pid::from_raw(pid as i32);

        if let Err(Errno::ESRCH) = kill(target, None) {
            return Err(Error::ProcessNotFound(pid));
        }

        match kill(target, Signal::SIGTERM) {
            Ok(()) => {
                debug!(pid, "sent SIGTERM, waiting for exit");
                if timeout(GRACE_PERIOD, exited(target)).await.is_ok() {
                    debug!(pid, "exited within the grace period");
                    return Ok(Termination::Graceful);
                }
                debug!(pid, "grace period elapsed, escalating");
            }
            // Graceful path unavailable (EPERM, or the process went away
            // mid-flight); the forceful kill reports the definitive result.
            Err(errno) => {
                warn!(pid, %errno, "SIGTERM not delivered, escalating");
            }
        }

        match kill(target, Signal::SIGKILL) {
            Ok(()) => Ok(Termination::Forced),
            Err(Errno::ESRCH) => Err(Error::ProcessNotFound(pid)),
            Err(Errno::EPERM) => Err(Error::PermissionDenied(pid)),
            Err(errno) => Err(Error::KillFailed {
                pid,
                reason: errno.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_reports_current_process() {
        assert!(alive(Pid::from_raw(std::process::id() as i32)));
    }

    #[test]
    fn alive_reports_absent_pid() {
        // Far above any realistic pid_max.
        assert!(!alive(Pid::from_raw(999_999_999)));
    }
}
