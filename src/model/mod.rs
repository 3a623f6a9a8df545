//! Document model types for markdown export.
//!
//! This module defines the intermediate representations that bridge the
//! markdown parsers and the format writers: the immutable source document,
//! the reflowable flow document, and the fixed-layout page command list.

mod document;
mod flow;
mod layout;

pub use document::SourceDocument;
pub use flow::{FlowBlock, FlowDocument, FlowKind, InlineRun};
pub use layout::{DrawCommand, DrawKind, FontSpec, LayoutResult, PageGeometry};
