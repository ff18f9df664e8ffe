//! Confweave: layered configuration resolution
//!
//! Entry point for the run-once demonstration binary.

use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, setup_tracing};
use run::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    match run::execute(&cli) {
        Ok(json) => {
            println!("{json}");
            exit_code::SUCCESS
        }
        Err(e) => {
            tracing::error!("Error resolving configuration: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}
