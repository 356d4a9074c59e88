//! Command-line interface layer.
//!
//! Commands build a [`commands::CommandResult`]; `report` prints it and the
//! result decides the process exit status.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

/// Environment variable holding a `tracing` filter directive, e.g. `LINGO_LOG=lingo=trace`.
pub const LOG_ENV: &str = "LINGO_LOG";

/// Install the stderr log subscriber.
///
/// `LINGO_LOG` wins when set; otherwise the level is `warn`, or `debug` with `--verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose;

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.exit_status())
}
