//! Source document type.

use serde::{Deserialize, Serialize};

/// A markdown note as handed over by the editor session.
///
/// Immutable input to every export operation. The engine never mutates it and
/// nothing derived from it outlives the export call that produced it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Note title. May be empty; writers fall back to a default.
    pub title: String,

    /// Raw markdown source.
    pub content: String,
}

impl SourceDocument {
    /// Create a new source document.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Title shown inside exported output, defaulting to "Untitled".
    pub fn display_title(&self) -> &str {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            "Untitled"
        } else {
            trimmed
        }
    }

    /// File name stem for artifacts, defaulting to "document".
    pub fn artifact_stem(&self) -> &str {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            "document"
        } else {
            trimmed
        }
    }

    /// Number of source lines (split on `\n`).
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
