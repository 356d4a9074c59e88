use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use lingo::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    lingo::cli::init_logging(args.verbose);

    match lingo::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
