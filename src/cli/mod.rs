//! Command Line Interface (CLI) layer for snipsplit.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). It wires the command line to the
//! library functionality exposed via `snipsplit::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
