mod chains;
mod cli;
mod logging;
mod runner;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::Cli::execute()
}
