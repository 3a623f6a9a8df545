//! Flow document types: styled runs and reflowable blocks.

use serde::{Deserialize, Serialize};

/// A maximal contiguous span of text sharing one style combination.
///
/// Runs are produced per line by the inline span parser and are
/// non-overlapping and full-coverage: concatenating the `text` of all runs of
/// a line reconstructs that line with its markdown delimiters stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineRun {
    /// The text content, delimiters removed.
    pub text: String,

    /// Bold (`**…**`) span.
    pub bold: bool,

    /// Italic (`*…*`) span.
    pub italic: bool,

    /// Inline code (`` `…` ``) span.
    pub monospace: bool,
}

impl InlineRun {
    /// Create a plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            ..Default::default()
        }
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            italic: true,
            ..Default::default()
        }
    }

    /// Create an inline-code run.
    pub fn code(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            monospace: true,
            ..Default::default()
        }
    }

    /// Check whether two runs carry the same style flags.
    pub fn same_style(&self, other: &InlineRun) -> bool {
        self.bold == other.bold
            && self.italic == other.italic
            && self.monospace == other.monospace
    }

    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.monospace
    }
}

/// Kind of a flow block.
///
/// Mirrors the block classifier's line kinds, plus the synthetic `Title`
/// block that roots every flow document. Blank source lines become
/// zero-content spacer blocks rather than being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    /// Synthetic document title block.
    Title,
    /// Level-1 heading (`# `).
    Heading1,
    /// Level-2 heading (`## `).
    Heading2,
    /// Level-3 heading (`### `).
    Heading3,
    /// Block quote (`> `).
    Quote,
    /// Bulleted list item (`- ` or `* `).
    ListItem,
    /// Horizontal rule (`---`).
    Rule,
    /// Blank source line, kept as a spacer.
    Blank,
    /// Plain paragraph text.
    Paragraph,
}

/// One block of a flow document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowBlock {
    /// Block kind.
    pub kind: FlowKind,

    /// Styled runs, in source order. Empty for Rule and Blank blocks.
    pub runs: Vec<InlineRun>,

    /// Indentation level. Always 0 for now: nested lists are unsupported.
    pub level: u8,
}

impl FlowBlock {
    /// Create a block with the given kind and runs.
    pub fn new(kind: FlowKind, runs: Vec<InlineRun>) -> Self {
        Self {
            kind,
            runs,
            level: 0,
        }
    }

    /// Create a block with no runs (Rule, Blank).
    pub fn empty(kind: FlowKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Plain text of the block (run texts concatenated).
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// An ordered, pagination-free tree of styled blocks.
///
/// Constructed fresh per export call and discarded after serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowDocument {
    /// Blocks in document order, starting with the synthetic title.
    pub blocks: Vec<FlowBlock>,
}

impl FlowDocument {
    /// Number of blocks, including the title block.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Plain text of the whole document, one line per block.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
