//! Interactive entry point for the virtual classroom manager.
//!
//! # Responsibility
//! - Resolve configuration and bootstrap core logging.
//! - Own the roster for the process lifetime and drive the menu shell.

mod config;
mod shell;

use classroom_core::{init_logging, RosterService};
use config::CliConfig;
use log::info;
use shell::Shell;
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let config = CliConfig::from_env();
    let log_dir = config.log_dir.to_string_lossy();
    // Logging is optional for an interactive session.
    if let Err(err) = init_logging(&config.log_level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }

    info!(
        "event=menu_start module=cli status=ok version={}",
        classroom_core::core_version()
    );

    let mut service = RosterService::in_memory();
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut service, stdin.lock(), stdout.lock()).run()?;

    info!("event=menu_stop module=cli status=ok");
    Ok(())
}
