//! snipsplit CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the split, and map the
//! outcome to an exit status. For programmatic use, prefer the library API
//! (`snipsplit::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
