//! List mode - show the PIDs using a port without touching them.

use anyhow::{Context, Result};
use freeport_core::PortResolver;
use serde::Serialize;

use super::process_name;
use crate::exit;

#[derive(Serialize)]
struct PortUser {
    pid: u32,
    name: String,
}

pub fn run(port: u16, json: bool) -> Result<u8> {
    let pids = PortResolver::new()
        .resolve(port)
        .context("failed to look up PIDs")?;

    if json {
        let users: Vec<PortUser> = pids
            .iter()
            .map(|&pid| PortUser {
                pid,
                name: process_name(pid),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&users)?);
        return Ok(exit::SUCCESS);
    }

    if pids.is_empty() {
        println!("No processes found using port {port}");
        return Ok(exit::SUCCESS);
    }

    println!("Processes using port {port}:");
    for pid in pids {
        println!("  PID {pid} ({})", process_name(pid));
    }
    Ok(exit::SUCCESS)
}
