//! Resolver integration tests against live OS state.

use std::net::TcpListener;

use freeport_core::PortResolver;

#[test]
fn resolves_own_listener() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let port = listener.local_addr().expect("local addr").port();

    let pids = PortResolver::new().resolve(port).expect("resolve");

    let me = std::process::id();
    assert!(
        pids.contains(&me),
        "expected own PID {me} in resolve({port}) result, got {pids:?}"
    );
}

#[test]
fn unused_port_resolves_empty() {
    // Bind-then-drop guarantees the port was free moments before the
    // snapshot; nothing re-binds it in between.
    let port = {
        let probe = TcpListener::bind("127.0.0.1:0").expect("bind probe");
        probe.local_addr().expect("local addr").port()
    };

    let pids = freeport_core::pids_on_port(port).expect("resolve");
    assert!(
        pids.is_empty(),
        "expected no PIDs on port {port}, got {pids:?}"
    );
}

#[test]
fn result_has_no_duplicates_and_no_zero() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let port = listener.local_addr().expect("local addr").port();

    let pids = PortResolver::new().resolve(port).expect("resolve");

    let mut deduped = pids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), pids.len(), "duplicate PIDs in {pids:?}");
    assert!(!pids.contains(&0), "zero PID in {pids:?}");
}
