//! Export coordinator.
//!
//! Selects an output format, drives the matching builder or layout engine,
//! hands the result to the format writer, and packages the bytes as a named
//! artifact. All internal failures surface here as a single error; bytes are
//! assembled fully in memory before any save side effect, so a failed export
//! never leaves a partial artifact behind.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::flow::build_flow;
use crate::layout::LayoutEngine;
use crate::model::SourceDocument;
use crate::render::{self, ExportOptions};

/// Output format for an export operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Raw markdown passthrough.
    #[default]
    Markdown,
    /// Paginated fixed-layout PDF.
    Pdf,
    /// Reflowable DOCX flow document.
    Docx,
}

impl ExportFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }

    /// MIME type of the artifact.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Resolve a format from a file extension (case insensitive).
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            other => Err(Error::InvalidFormat(other.to_string())),
        }
    }

    /// User-facing message for a failed export in this format.
    pub fn failure_message(&self) -> String {
        format!("failed to export as {}", self)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Markdown => "Markdown",
            ExportFormat::Pdf => "PDF",
            ExportFormat::Docx => "DOCX",
        };
        write!(f, "{}", name)
    }
}

/// A named byte artifact produced by one export operation.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// File name including extension.
    pub file_name: String,

    /// MIME type hint for the save side effect.
    pub mime_type: &'static str,

    /// Artifact content.
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Size of the artifact in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the artifact is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Save the artifact into a directory, returning the written path.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Export a document in the requested format.
///
/// Each invocation constructs its own state from scratch; concurrent export
/// calls share nothing and need no locking.
pub fn export(
    doc: &SourceDocument,
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<Artifact> {
    if doc.is_empty() {
        // Not an error: an empty note still yields a minimal valid artifact.
        warn!("exporting empty document as {}", format);
    }

    let bytes = match format {
        ExportFormat::Markdown => render::to_markdown(doc),
        ExportFormat::Pdf => {
            let layout = LayoutEngine::new(options.geometry).layout(doc)?;
            render::to_pdf(&layout, options)?
        }
        ExportFormat::Docx => {
            let flow = build_flow(doc);
            render::to_docx(&flow, options)?
        }
    };

    let artifact = Artifact {
        file_name: format!("{}.{}", doc.artifact_stem(), format.extension()),
        mime_type: format.mime_type(),
        bytes,
    };
    debug!(
        "exported {} as {} ({} bytes)",
        artifact.file_name,
        format,
        artifact.len()
    );
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_extensions_and_mime() {
        assert_eq!(ExportFormat::Markdown.extension(), "md");
        assert_eq!(ExportFormat::Pdf.extension(), "pdf");
        assert_eq!(ExportFormat::Docx.extension(), "docx");
        assert_eq!(ExportFormat::Pdf.mime_type(), "application/pdf");
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ExportFormat::from_extension("MD").unwrap(),
            ExportFormat::Markdown
        );
        assert_eq!(
            ExportFormat::from_extension("pdf").unwrap(),
            ExportFormat::Pdf
        );
        assert!(matches!(
            ExportFormat::from_extension("odt"),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(
            ExportFormat::Pdf.failure_message(),
            "failed to export as PDF"
        );
    }

    #[test]
    fn test_artifact_naming_defaults() {
        let doc = SourceDocument::new("", "");
        let artifact = export(&doc, ExportFormat::Markdown, &ExportOptions::default()).unwrap();
        assert_eq!(artifact.file_name, "document.md");
        assert!(artifact.is_empty());
    }

    #[test]
    fn test_artifact_naming_from_title() {
        let doc = SourceDocument::new("Meeting Notes", "hello");
        let artifact = export(&doc, ExportFormat::Pdf, &ExportOptions::default()).unwrap();
        assert_eq!(artifact.file_name, "Meeting Notes.pdf");
        assert!(artifact.bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_markdown_passthrough() {
        let doc = SourceDocument::new("t", "# raw **source**\n");
        let artifact = export(&doc, ExportFormat::Markdown, &ExportOptions::default()).unwrap();
        assert_eq!(artifact.bytes, doc.content.as_bytes());
    }
}
