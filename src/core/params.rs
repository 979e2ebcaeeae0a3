use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Directory used when none is given on the command line.
pub const DEFAULT_OUTPUT_DIR: &str = "output_snippets";

/// Run parameters suitable for embedding callers and the CLI alike
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitParams {
    /// Directory receiving one file per snippet; created if missing
    pub output_dir: PathBuf,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
