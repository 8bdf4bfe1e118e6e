//! Kill mode - resolve a port and terminate each process using it.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use freeport_core::{terminate, PortResolver};

use super::process_name;
use crate::exit;

pub async fn run(port: u16, force: bool, dry_run: bool, verbose: bool) -> Result<u8> {
    let pids = PortResolver::new()
        .resolve(port)
        .context("failed to look up PIDs")?;

    if pids.is_empty() {
        println!("No processes found using port {port}");
        return Ok(exit::NOT_FOUND);
    }

    if verbose {
        println!("Found {} process(es) using port {port}", pids.len());
    }

    let mut code = exit::SUCCESS;
    for pid in pids {
        if !handle_pid(pid, port, force, dry_run).await {
            code = exit::FAILURE;
        }
    }
    Ok(code)
}

/// Returns false only when a kill was attempted and failed; skipped and
/// dry-run PIDs count as handled.
async fn handle_pid(pid: u32, port: u16, force: bool, dry_run: bool) -> bool {
    let name = process_name(pid);

    if dry_run {
        println!("[dry-run] Would kill: {name} (PID {pid})");
        return true;
    }

    if !force && !confirm(&name, pid, port) {
        println!("Skipped: {name} (PID {pid})");
        return true;
    }

    match terminate(pid).await {
        Ok(outcome) => {
            println!("Killed ({outcome}): {name} (PID {pid})");
            true
        }
        Err(e) => {
            eprintln!("Error: failed to kill PID {pid}: {e}");
            false
        }
    }
}

/// Ask on stdin whether to kill; anything but y/yes declines.
fn confirm(name: &str, pid: u32, port: u16) -> bool {
    print!("Process {name} (PID {pid}) is using port {port}. Kill it? [y/N]: ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    is_affirmative(&answer)
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
