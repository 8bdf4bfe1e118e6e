//! Freeport CLI - free a TCP port by terminating whatever holds it.
//!
//! Resolves the PIDs using a port, then kills each one after a
//! confirmation prompt (unless `--force`). `--list` and `--dry-run` only
//! report. All user-facing I/O and exit-code mapping lives here; the core
//! library never prints or exits.

mod commands;

use std::process::ExitCode;

use clap::Parser;

/// Process exit codes.
pub(crate) mod exit {
    pub const SUCCESS: u8 = 0;
    /// Invalid arguments exit with 2 via clap's own error path.
    pub const NOT_FOUND: u8 = 3;
    pub const FAILURE: u8 = 4;
}

#[derive(Parser)]
#[command(name = "freeport")]
#[command(author, version, about = "Free a TCP port by terminating the processes using it")]
#[command(after_help = "\
Examples:
  freeport 8080              Kill processes on port 8080 (with prompt)
  freeport -f 8080           Kill processes on port 8080 without prompting
  freeport --list 8080       Show the PIDs using port 8080
  freeport --dry-run 8080    Show what would be killed")]
struct Cli {
    /// TCP port to inspect (1-65535)
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Kill without prompting
    #[arg(short, long)]
    force: bool,

    /// Show the PIDs using the port instead of killing them
    #[arg(short, long)]
    list: bool,

    /// Show what would be killed but do not kill
    #[arg(long)]
    dry_run: bool,

    /// Machine-readable list output
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = if cli.list {
        commands::list::run(cli.port, cli.json)
    } else {
        commands::kill::run(cli.port, cli.force, cli.dry_run, cli.verbose).await
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit::FAILURE)
        }
    }
}
