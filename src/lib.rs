#![doc = r#"
snipsplit — split an exported JSON bundle of code snippets into individual files.

Snippet managers such as WPCode export their snippets as one JSON array. This
crate turns every element of that array into its own source file, named
`<id>_<title><ext>`, so the snippets can be edited or kept under version
control. It powers the `snipsplit` CLI and can be embedded in your own tools.

Quick start: split an export on disk
------------------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use snipsplit::{split_file, SplitParams};

fn main() -> snipsplit::Result<()> {
    let params = SplitParams {
        output_dir: PathBuf::from("snippets"),
    };

    let report = split_file(Path::new("export.json"), &params, |event| {
        println!("{event}");
    })?;

    println!("created={} failed={}", report.created, report.failed);
    Ok(())
}
```

Naming and content helpers
--------------------------
```rust
use snipsplit::{build_content, clean_code, extension_for, sanitize_filename};

assert_eq!(sanitize_filename("Hello: World"), "Hello_ World");
assert_eq!(extension_for("JavaScript"), ".js");
assert_eq!(clean_code("a\r\n\r\n\r\n\r\nb"), "a\n\nb");
assert_eq!(build_content("php", "echo 1;"), "<?php\necho 1;");
```

Error handling
--------------
Loading fails as a whole when the export is missing, is not JSON, or is not an
array. Everything after that is per record: a bad element is reported through
the event callback and counted in the `SplitReport`, and the pass goes on.

```rust,no_run
use std::path::Path;
use snipsplit::{split_file, Error, SplitParams};

fn main() {
    match split_file(Path::new("export.json"), &SplitParams::default(), |_| {}) {
        Ok(report) => println!("{} of {} written", report.created, report.total),
        Err(Error::NotFound { path }) => eprintln!("missing: {}", path.display()),
        Err(Error::NotAnArray { found }) => eprintln!("expected an array, got {found}"),
        Err(other) => eprintln!("error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — batch entry points and progress events.
- [`core`] — filename derivation, code cleanup, run parameters.
- [`types`] — snippet record model and `CodeType`.
- [`io`] — export loading and file writing.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::{DEFAULT_OUTPUT_DIR, SplitParams};
pub use error::{Error, Result};
pub use types::{CodeType, Snippet, SnippetId, SnippetRecord};

// Helpers
pub use crate::core::content::{build_content, clean_code};
pub use crate::core::filename::{extension_for, sanitize_filename, snippet_filename};
pub use io::{load_snippets, write_snippet};

// High-level API
pub use api::{SplitEvent, SplitReport, process_all, split_file, split_loaded};
