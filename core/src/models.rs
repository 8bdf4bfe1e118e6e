//! Core data models.
//!
//! These models are platform-agnostic; platform-specific code produces or
//! consumes them but never extends them.

use std::fmt;
use std::net::IpAddr;

use serde::Serialize;

/// One entry of a point-in-time TCP connection table snapshot.
///
/// Sourced wholesale from the OS at resolve-time, read-only afterwards.
/// A fresh snapshot is taken per resolve call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TcpConnection {
    /// Local endpoint address.
    pub local_addr: IpAddr,
    /// Local endpoint port.
    pub local_port: u16,
    /// Remote endpoint address (unspecified for listening sockets).
    pub remote_addr: IpAddr,
    /// Remote endpoint port (zero for listening sockets).
    pub remote_port: u16,
    /// PIDs the OS attributes to the socket; empty when unowned.
    pub pids: Vec<u32>,
}

/// How a terminated process went down.
///
/// "Not found" and "permission denied" are error variants on
/// [`crate::Error`], not outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Termination {
    /// The process exited on its own within the grace period.
    Graceful,
    /// The grace period elapsed (or the graceful request could not be
    /// delivered) and the process was killed outright.
    Forced,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Graceful => write!(f, "graceful"),
            Termination::Forced => write!(f, "forced"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn termination_display() {
        assert_eq!(Termination::Graceful.to_string(), "graceful");
        assert_eq!(Termination::Forced.to_string(), "forced");
    }
}
