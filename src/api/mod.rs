//! High-level library API: split a loaded export into files, or go straight
//! from an export on disk to an output directory. Prefer these entrypoints
//! over the `core` and `io` helpers when embedding snipsplit.
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::content::{build_content, clean_code};
use crate::core::filename::snippet_filename;
use crate::core::params::SplitParams;
use crate::error::{Error, Result};
use crate::io::{load_snippets, write_snippet};
use crate::types::SnippetRecord;

/// Batch report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub total: usize,
    pub created: usize,
    pub failed: usize,
}

/// Per-record outcome, emitted in input order while the batch runs.
/// `Display` renders the progress line shown to users.
#[derive(Debug)]
pub enum SplitEvent<'a> {
    Created {
        position: usize,
        total: usize,
        filename: &'a str,
        path: &'a Path,
    },
    Failed {
        position: usize,
        total: usize,
        error: &'a Error,
    },
}

impl fmt::Display for SplitEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitEvent::Created {
                position,
                total,
                filename,
                ..
            } => write!(f, "[{}/{}] Created: {}", position, total, filename),
            SplitEvent::Failed {
                position, error, ..
            } => write!(f, "Error processing snippet {}: {}", position, error),
        }
    }
}

/// Decode, name, clean and write one element. Returns the file name and path.
fn process_record(
    position: usize,
    value: Value,
    output_dir: &Path,
) -> Result<(String, PathBuf)> {
    let snippet = SnippetRecord::from_value(position, value)?.resolve(position)?;
    let filename = snippet_filename(&snippet.id, &snippet.title, &snippet.code_type);
    debug!(
        "Snippet {}: id={:?} code_type={:?} -> {}",
        position, snippet.id, snippet.code_type, filename
    );

    let content = build_content(&snippet.code_type, &clean_code(&snippet.code));
    let path = write_snippet(output_dir, &filename, &content)?;
    Ok((filename, path))
}

/// Write every element of `snippets` to `output_dir`, which must exist.
///
/// A failing element is reported through `on_event` and counted, never
/// propagated: the pass always reaches the end of the list.
pub fn process_all<F>(snippets: Vec<Value>, output_dir: &Path, mut on_event: F) -> SplitReport
where
    F: FnMut(&SplitEvent<'_>),
{
    let total = snippets.len();
    let mut report = SplitReport {
        total,
        ..SplitReport::default()
    };

    for (index, value) in snippets.into_iter().enumerate() {
        let position = index + 1;
        match process_record(position, value, output_dir) {
            Ok((filename, path)) => {
                report.created += 1;
                on_event(&SplitEvent::Created {
                    position,
                    total,
                    filename: &filename,
                    path: &path,
                });
            }
            Err(error) => {
                warn!("Error processing snippet {}: {}", position, error);
                report.failed += 1;
                on_event(&SplitEvent::Failed {
                    position,
                    total,
                    error: &error,
                });
            }
        }
    }

    info!(
        "Split complete: total={} created={} failed={}",
        report.total, report.created, report.failed
    );
    report
}

/// Load the export at `input`, create the output directory, and write every snippet.
///
/// Fails before touching the output directory if the export is missing,
/// is not JSON, or is not an array.
pub fn split_file<F>(input: &Path, params: &SplitParams, on_event: F) -> Result<SplitReport>
where
    F: FnMut(&SplitEvent<'_>),
{
    let snippets = load_snippets(input)?;
    split_loaded(snippets, params, on_event)
}

/// Same as [`split_file`] for an export that has already been loaded.
pub fn split_loaded<F>(
    snippets: Vec<Value>,
    params: &SplitParams,
    on_event: F,
) -> Result<SplitReport>
where
    F: FnMut(&SplitEvent<'_>),
{
    fs::create_dir_all(&params.output_dir).map_err(Error::from)?;
    info!("Output directory: {:?}", params.output_dir);
    Ok(process_all(snippets, &params.output_dir, on_event))
}
