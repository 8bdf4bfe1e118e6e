//! Example: print the PIDs using a TCP port.

use freeport_core::PortResolver;

fn main() {
    let port = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u16>().ok())
        .unwrap_or(8080);

    match PortResolver::new().resolve(port) {
        Ok(pids) if pids.is_empty() => println!("No processes using port {port}"),
        Ok(pids) => {
            for pid in pids {
                println!("{pid}");
            }
        }
        Err(e) => eprintln!("Error resolving port {port}: {e}"),
    }
}
