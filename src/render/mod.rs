//! Format writers for export artifacts.
//!
//! Each writer turns a fully built structure into artifact bytes: the raw
//! markdown passthrough, the fixed-page PDF writer for draw-command lists,
//! and the reflowable DOCX writer for flow documents.

pub mod docx;
pub mod markdown;
mod options;
pub mod pdf;

pub use docx::to_docx;
pub use markdown::to_markdown;
pub use options::ExportOptions;
pub use pdf::to_pdf;
