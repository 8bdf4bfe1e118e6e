//! Process termination with graceful-then-forceful escalation.
//!
//! The path per invocation is linear: probe the PID, request a graceful
//! exit, race the exit against [`GRACE_PERIOD`], then kill outright. The
//! forceful kill is only ever sent after the deadline elapses or the
//! graceful request fails to deliver; it is a fallback, never a first
//! resort. Nothing is retried beyond that one escalation.

use std::time::Duration;

use crate::error::Result;
use crate::models::Termination;

#[cfg(unix)]
mod unix;

#[cfg(windows)]
mod windows;

/// How long a process gets to exit on its own after the graceful request.
pub const GRACE_PERIOD: Duration = Duration::from_secs(3);

/// Capability interface for platform process termination.
///
/// Two build-time variants exist: the Unix one runs the full
/// graceful-then-forceful escalation over signals, the Windows one
/// collapses to the platform's single kill primitive. Outcome and failure
/// vocabulary are identical from the caller's point of view.
#[allow(async_fn_in_trait)]
pub trait Terminator: Send + Sync {
    /// Terminate the process with the given PID.
    ///
    /// Returns how the process went down, or an error if it could not be
    /// found or signalled.
    async fn terminate(&self, pid: u32) -> Result<Termination>;
}

#[cfg(unix)]
pub use unix::SignalTerminator as PlatformTerminator;

#[cfg(windows)]
pub use windows::TaskkillTerminator as PlatformTerminator;

// Compile-time check for unsupported platforms
#[cfg(not(any(unix, windows)))]
compile_error!("Unsupported platform: requires Unix signals or the Windows taskkill primitive");

/// Terminate a process using the platform terminator.
///
/// Convenience wrapper around [`PlatformTerminator`].
pub async fn terminate(pid: u32) -> Result<Termination> {
    PlatformTerminator::new().terminate(pid).await
}
