//! Port-to-PID resolution over a connection table snapshot.
//!
//! One blocking OS call produces an immutable snapshot of all current TCP
//! connections (IPv4 and IPv6); a pure filter then collects the PIDs using
//! the queried port. No state is held across calls.

use std::collections::HashSet;

use netstat2::{get_sockets_info, AddressFamilyFlags, ProtocolFlags, ProtocolSocketInfo};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::TcpConnection;

/// Resolves TCP ports to the processes using them.
#[derive(Debug, Default)]
pub struct PortResolver;

impl PortResolver {
    /// Create a new resolver for the current platform.
    pub fn new() -> Self {
        Self
    }

    /// Resolve a TCP port to the set of PIDs using it.
    ///
    /// A port nobody uses resolves to an empty vector, not an error. The
    /// result is deduplicated, contains no zero PIDs, and carries no
    /// ordering guarantee.
    pub fn resolve(&self, port: u16) -> Result<Vec<u32>> {
        let table = snapshot()?;
        let pids = pids_matching(&table, port);
        debug!(
            port,
            connections = table.len(),
            matches = pids.len(),
            "resolved port"
        );
        Ok(pids)
    }
}

/// Convenience wrapper around [`PortResolver::resolve`].
pub fn pids_on_port(port: u16) -> Result<Vec<u32>> {
    PortResolver::new().resolve(port)
}

/// Snapshot the machine's current TCP connection table, IPv4 and IPv6.
///
/// A snapshot failure (insufficient privilege, platform API failure)
/// surfaces immediately; it is never retried.
fn snapshot() -> Result<Vec<TcpConnection>> {
    let af_flags = AddressFamilyFlags::IPV4 | AddressFamilyFlags::IPV6;
    let sockets = get_sockets_info(af_flags, ProtocolFlags::TCP)
        .map_err(|e| Error::Snapshot(e.to_string()))?;

    Ok(sockets
        .into_iter()
        .filter_map(|socket| match socket.protocol_socket_info {
            ProtocolSocketInfo::Tcp(tcp) => Some(TcpConnection {
                local_addr: tcp.local_addr,
                local_port: tcp.local_port,
                remote_addr: tcp.remote_addr,
                remote_port: tcp.remote_port,
                pids: socket.associated_pids,
            }),
            // Only stream sockets can hold a TCP port.
            ProtocolSocketInfo::Udp(_) => None,
        })
        .collect())
}

/// Collect the deduplicated non-zero PIDs of every connection using `port`
/// on either endpoint.
///
/// Matching the remote endpoint too is deliberate: a process holding the
/// queried port as the source port of an outbound connection is still
/// using it.
fn pids_matching(table: &[TcpConnection], port: u16) -> Vec<u32> {
    let mut seen: HashSet<u32> = HashSet::new();

    for conn in table {
        if conn.local_port != port && conn.remote_port != port {
            continue;
        }
        for &pid in &conn.pids {
            if pid != 0 {
                seen.insert(pid);
            }
        }
    }

    seen.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    fn conn(local_port: u16, remote_port: u16, pids: Vec<u32>) -> TcpConnection {
        TcpConnection {
            local_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            local_port,
            remote_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            remote_port,
            pids,
        }
    }

    #[test]
    fn matches_local_endpoint() {
        let table = vec![conn(3000, 0, vec![41]), conn(8080, 0, vec![42])];
        assert_eq!(pids_matching(&table, 8080), vec![42]);
    }

    #[test]
    fn matches_remote_endpoint() {
        // Outbound connection whose peer endpoint is the queried port.
        let table = vec![conn(50_123, 8080, vec![77])];
        assert_eq!(pids_matching(&table, 8080), vec![77]);
    }

    #[test]
    fn deduplicates_pids_across_connections() {
        let table = vec![conn(8080, 0, vec![42]), conn(8080, 50_001, vec![42, 42])];
        assert_eq!(pids_matching(&table, 8080), vec![42]);
    }

    #[test]
    fn drops_unowned_entries() {
        let table = vec![conn(8080, 0, vec![0]), conn(8080, 0, vec![])];
        assert!(pids_matching(&table, 8080).is_empty());
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let table = vec![conn(3000, 0, vec![41])];
        assert!(pids_matching(&table, 9999).is_empty());
    }
}
