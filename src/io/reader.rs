use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Read an export and return its elements without decoding them.
///
/// Elements are decoded one by one during the batch pass so that a malformed
/// element fails only itself. A missing file, invalid JSON, or a top-level
/// value other than an array fails the whole load.
pub fn load_snippets(path: &Path) -> Result<Vec<Value>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;
    let reader = BufReader::new(file);

    // Read failures surface through serde_json; keep them apart from syntax errors
    let value: Value = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            Error::Io(e.into())
        } else {
            Error::Json(e)
        }
    })?;
    debug!("Parsed JSON document from {:?}", path);

    match value {
        Value::Array(items) => {
            info!("Loaded {} snippet records from {:?}", items.len(), path);
            Ok(items)
        }
        other => Err(Error::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
