//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `commands`: command handlers (`inspect`, `transform`, `init`)
//! - `exit_status`: process exit codes
//! - `report`: terminal and JSON output

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Inspect(cmd)) => commands::inspect::inspect(cmd),
        Some(Command::Transform(cmd)) => commands::transform::transform(cmd),
        Some(Command::Init) => commands::init::init(),
        None => Ok(ExitStatus::Success),
    }
}
