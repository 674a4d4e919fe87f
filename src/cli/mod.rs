//! Command-line interface.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `commands`: one handler per subcommand
//! - `exit_status`: process exit codes
//! - `report`: terminal and JSON output
//! - `run`: command dispatch

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;
mod run;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
