//! I/O layer: loading an export from disk and writing snippet files.
pub mod reader;
pub use reader::load_snippets;

pub mod writer;
pub use writer::write_snippet;
