use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Write `content` as UTF-8 to `output_dir/filename` in a single call,
/// replacing any file of the same name. Returns the written path.
pub fn write_snippet(output_dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let path = output_dir.join(filename);
    fs::write(&path, content)?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(path)
}
