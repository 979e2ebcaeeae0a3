use once_cell::sync::Lazy;
use regex::Regex;

const PHP_HEADER: &str = "<?php\n";

// Three or more newlines, possibly with whitespace-only lines between them.
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n+").unwrap());

/// Normalize line endings to `\n`, trim the whole text, and collapse runs of
/// blank lines into a single blank line.
pub fn clean_code(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    BLANK_RUN
        .replace_all(normalized.trim(), "\n\n")
        .into_owned()
}

/// Prepend the PHP open tag for `php` snippets. The comparison is exact:
/// `PHP` still gets a `.php` extension but no header.
pub fn build_content(code_type: &str, cleaned: &str) -> String {
    if code_type == "php" {
        format!("{}{}", PHP_HEADER, cleaned)
    } else {
        cleaned.to_string()
    }
}
