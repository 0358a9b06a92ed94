//! display-modes CLI
//!
//! Usage:
//!   display-modes list                     # Displays with their current mode
//!   display-modes list --modes --json      # Every supported mode, as JSON
//!   display-modes set -d 0 -W 1280 -H 720  # Switch display 0 to 1280x720
//!   display-modes restore -d 0             # Back to the stored default
//!
//! Exit codes: 0 on success, 1 when the OS rejects a change, 2 on errors.

use crate::cli::{Cli, Commands};
use crate::command::{handle_list, handle_restore, handle_set, Outcome};
use tracing_subscriber::EnvFilter;

mod cli;
mod command;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let displays = display_modes::system_displays()?;
    match &cli.command {
        Commands::List(args) => handle_list(displays, args),
        Commands::Set(args) => handle_set(displays, args),
        Commands::Restore(args) => handle_restore(displays, args),
    }
}

fn main() {
    use clap::Parser;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(Outcome::Done) => {}
        Ok(Outcome::Rejected) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(2);
        }
    }
}
