//! Shared types used across snipsplit.
//! Includes the raw `SnippetRecord` as found in an export, its resolved form
//! `Snippet`, the scalar `SnippetId`, and the `CodeType` tag.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CodeType {
    Php,
    Html,
    Css,
    Js,
    Text,
}

impl CodeType {
    /// Case-insensitive. `javascript` is an alias of `js`; unknown tags fall back to `Text`.
    pub fn parse(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "php" => CodeType::Php,
            "html" => CodeType::Html,
            "css" => CodeType::Css,
            "js" | "javascript" => CodeType::Js,
            _ => CodeType::Text,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            CodeType::Php => ".php",
            CodeType::Html => ".html",
            CodeType::Css => ".css",
            CodeType::Js => ".js",
            CodeType::Text => ".txt",
        }
    }
}

/// Snippet identifier. Exports use strings or numbers; any JSON scalar is accepted.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnippetId {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl std::fmt::Display for SnippetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnippetId::Text(s) => write!(f, "{}", s),
            SnippetId::Number(n) => write!(f, "{}", n),
            SnippetId::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// One element of an export as it appears on disk.
///
/// Only `id`, `title`, `code` and `code_type` shape the output. The remaining
/// fields are kept as raw JSON so that whatever a host system stored there
/// never fails a record.
#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct SnippetRecord {
    #[serde(default)]
    pub id: Option<SnippetId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub code_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_insert: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Value>,
}

impl SnippetRecord {
    /// Decode the element found at 1-based `position` of the input array.
    pub fn from_value(position: usize, value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::InvalidRecord {
            position,
            reason: e.to_string(),
        })
    }

    /// Apply the per-position defaults and check that the id is usable in a file name.
    pub fn resolve(self, position: usize) -> Result<Snippet> {
        let id = match self.id {
            Some(id) => id.to_string(),
            None => format!("snippet_{}", position),
        };
        if id.contains(['/', '\\', '\0']) {
            return Err(Error::UnsafeId { id });
        }

        Ok(Snippet {
            id,
            title: self.title.unwrap_or_else(|| format!("Сниппет {}", position)),
            code: self.code.unwrap_or_default(),
            code_type: self.code_type.unwrap_or_else(|| "text".to_string()),
        })
    }
}

/// A record with every defaulted field filled in.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub code: String,
    /// Kept verbatim: the extension lookup ignores case, the PHP header check does not.
    pub code_type: String,
}
