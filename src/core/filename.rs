use crate::types::CodeType;

/// Characters Windows refuses in file names.
const FORBIDDEN: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

const MAX_TITLE_CHARS: usize = 100;

const FALLBACK_NAME: &str = "snippet";

/// Turn a free-text title into a file name component.
///
/// Forbidden characters become `_`, the result is cut to 100 characters,
/// trimmed, and stripped of trailing dots. An empty result yields `snippet`.
pub fn sanitize_filename(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
        .take(MAX_TITLE_CHARS)
        .collect();

    let name = replaced.trim().trim_end_matches('.');
    if name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Extension (with leading dot) for a declared code type, ignoring case.
pub fn extension_for(code_type: &str) -> &'static str {
    CodeType::parse(code_type).extension()
}

/// `<id>_<sanitized title><extension>`
pub fn snippet_filename(id: &str, title: &str, code_type: &str) -> String {
    format!(
        "{}_{}{}",
        id,
        sanitize_filename(title),
        extension_for(code_type)
    )
}
