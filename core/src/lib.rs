//! Freeport Core Library
//!
//! Resolves a TCP port to the set of processes using it and terminates
//! processes with a graceful-then-forceful escalation:
//! - `resolve`: snapshot the OS connection table and filter it to a port
//! - `terminate`: request a graceful exit, wait out a bounded grace period,
//!   then kill outright
//!
//! The two halves are independent: the resolver only reads OS state, the
//! terminator only sends termination requests and observes process exit.
//! The tool built on top is one-shot and stateless; nothing here caches or
//! retries.
//!
//! # Platform Support
//! - Unix: signal-based termination (SIGTERM/SIGKILL via `nix`)
//! - Windows: single forceful primitive (`taskkill /F`)

pub mod error;
pub mod models;
pub mod resolver;
pub mod terminator;

pub use error::{Error, Result};
pub use models::{Termination, TcpConnection};
pub use resolver::{pids_on_port, PortResolver};
pub use terminator::{terminate, PlatformTerminator, Terminator, GRACE_PERIOD};
