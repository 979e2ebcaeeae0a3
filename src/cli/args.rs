use clap::Parser;
use std::path::PathBuf;

use snipsplit::DEFAULT_OUTPUT_DIR;

const AFTER_HELP: &str = "Example: snipsplit wpcode-snippets-export-2025-08-25.json output_snippets";

#[derive(Parser)]
#[command(
    name = "snipsplit",
    version,
    about = "Split a JSON export of code snippets into individual files",
    after_help = AFTER_HELP
)]
pub struct CliArgs {
    /// JSON export containing an array of snippets
    pub json_file: Option<PathBuf>,

    /// Directory receiving one file per snippet
    #[arg(default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
