//! CLI command implementations.

pub mod kill;
pub mod list;

use sysinfo::{Pid, System};

/// Best-effort process name lookup for display.
///
/// The core only deals in PIDs; naming is display sugar and must not fail
/// the run, so an unreadable process falls back to a placeholder.
pub(crate) fn process_name(pid: u32) -> String {
    let mut system = System::new();
    if system.refresh_process(Pid::from_u32(pid)) {
        if let Some(process) = system.process(Pid::from_u32(pid)) {
            return process.name().to_string();
        }
    }
    format!("process_{pid}")
}
