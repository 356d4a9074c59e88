use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, clean::clean, extract::extract, init::init, status::status, sync::sync},
};

/// Dispatch to the command handler for the parsed arguments.
pub fn run(Arguments { command, .. }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Sync(cmd)) => sync(cmd),
        Some(Command::Status(cmd)) => status(cmd),
        Some(Command::Clean(cmd)) => clean(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
