//! # mdexport
//!
//! Markdown note export engine for Rust.
//!
//! Takes a note (title plus raw markdown source) and deterministically
//! produces export artifacts in three formats: a raw Markdown passthrough, a
//! paginated fixed-layout PDF, and a reflowable DOCX document.
//!
//! ## Quick Start
//!
//! ```
//! use mdexport::{export, ExportFormat, ExportOptions, SourceDocument};
//!
//! fn main() -> mdexport::Result<()> {
//!     let doc = SourceDocument::new("My Note", "# Hello\n\nSome **bold** text.");
//!
//!     let artifact = export(&doc, ExportFormat::Pdf, &ExportOptions::default())?;
//!     assert_eq!(artifact.file_name, "My Note.pdf");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! - A line-oriented **block classifier** tags every source line (headings,
//!   quotes, list items, rules, blanks, paragraphs) with no lookahead.
//! - An **inline span parser** tokenizes each line into bold/italic/code
//!   runs, resolving links to their display text and degrading malformed
//!   syntax to plain text.
//! - The **flow builder** maps classified lines onto a pagination-free block
//!   tree for reflow-capable output (DOCX).
//! - The **layout engine** wraps text against a fixed column width, advances
//!   a vertical cursor, and emits page-relative draw commands with explicit
//!   page breaks (PDF).
//!
//! The two paths intentionally diverge in styling fidelity: the flow path
//! preserves per-run bold/italic/monospace, while the fixed-layout path
//! flattens emphasis to plain text before wrapping.
//!
//! The engine supports a fixed markdown subset; nested lists, tables, and
//! images degrade to plain paragraph text rather than failing.

pub mod error;
pub mod export;
pub mod flow;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{export, Artifact, ExportFormat};
pub use flow::build_flow;
pub use layout::{layout_document, BuiltinMeasurer, LayoutEngine, TextMeasurer};
pub use model::{
    DrawCommand, DrawKind, FlowBlock, FlowDocument, FlowKind, FontSpec, InlineRun, LayoutResult,
    PageGeometry, SourceDocument,
};
pub use parser::{classify, classify_line, parse_inline, LineKind, LineRecord};
pub use render::ExportOptions;

/// Builder for configuring and running exports.
///
/// # Example
///
/// ```
/// use mdexport::{Exporter, ExportFormat, SourceDocument};
///
/// let doc = SourceDocument::new("", "# Hi\n\nWorld");
/// let artifact = Exporter::new()
///     .with_title("Renamed")
///     .export(&doc, ExportFormat::Docx)?;
/// assert_eq!(artifact.file_name, "Renamed.docx");
/// # Ok::<(), mdexport::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    options: ExportOptions,
    title_override: Option<String>,
}

impl Exporter {
    /// Create a new exporter with default options.
    pub fn new() -> Self {
        Self {
            options: ExportOptions::default(),
            title_override: None,
        }
    }

    /// Override the document title for naming and the synthetic title block.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title_override = Some(title.into());
        self
    }

    /// Set the page geometry for the fixed-layout path.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.options = self.options.with_geometry(geometry);
        self
    }

    /// Set the bullet glyph used by the flow writer.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.options = self.options.with_list_marker(marker);
        self
    }

    /// Set the rule glyph count used by the flow writer.
    pub fn with_rule_width(mut self, width: usize) -> Self {
        self.options = self.options.with_rule_width(width);
        self
    }

    /// The configured options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export a document in the requested format.
    pub fn export(&self, doc: &SourceDocument, format: ExportFormat) -> Result<Artifact> {
        match &self.title_override {
            Some(title) => {
                let doc = SourceDocument::new(title.clone(), doc.content.clone());
                export::export(&doc, format, &self.options)
            }
            None => export::export(doc, format, &self.options),
        }
    }
}

/// Export a document as raw markdown.
pub fn export_markdown(doc: &SourceDocument) -> Result<Artifact> {
    export(doc, ExportFormat::Markdown, &ExportOptions::default())
}

/// Export a document as a paginated PDF.
pub fn export_pdf(doc: &SourceDocument) -> Result<Artifact> {
    export(doc, ExportFormat::Pdf, &ExportOptions::default())
}

/// Export a document as a reflowable DOCX.
pub fn export_docx(doc: &SourceDocument) -> Result<Artifact> {
    export(doc, ExportFormat::Docx, &ExportOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exporter_builder() {
        let exporter = Exporter::new().with_list_marker('-').with_rule_width(20);
        assert_eq!(exporter.options().list_marker, '-');
        assert_eq!(exporter.options().rule_width, 20);
    }

    #[test]
    fn test_exporter_title_override() {
        let doc = SourceDocument::new("Original", "body");
        let artifact = Exporter::new()
            .with_title("Renamed")
            .export(&doc, ExportFormat::Markdown)
            .unwrap();
        assert_eq!(artifact.file_name, "Renamed.md");
    }

    #[test]
    fn test_convenience_exports() {
        let doc = SourceDocument::new("n", "# Hi");
        assert!(export_markdown(&doc).unwrap().file_name.ends_with(".md"));
        assert!(export_pdf(&doc).unwrap().bytes.starts_with(b"%PDF-"));
        assert!(export_docx(&doc).unwrap().bytes.starts_with(b"PK"));
    }
}
