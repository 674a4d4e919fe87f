use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{classify::classify, init::init, scan::scan},
    exit_status::ExitStatus,
};

/// Dispatch a parsed command to its handler.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Classify(cmd)) => classify(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
