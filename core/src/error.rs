//! Error types for the freeport-core library.

use thiserror::Error;

/// Result type alias for freeport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving ports or terminating processes.
#[derive(Error, Debug)]
pub enum Error {
    /// The connection table snapshot could not be obtained.
    #[error("failed to snapshot the connection table: {0}")]
    Snapshot(String),

    /// The PID does not (or no longer does) name a live process.
    #[error("process {0} not found")]
    ProcessNotFound(u32),

    /// The caller lacks the rights to signal the target process.
    #[error("permission denied to signal process {0}")]
    PermissionDenied(u32),

    /// The last-resort forceful kill failed.
    #[error("failed to kill process {pid}: {reason}")]
    KillFailed { pid: u32, reason: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
