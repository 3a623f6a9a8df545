//! Flow document builder.
//!
//! Maps classified lines to an ordered block sequence for reflow-capable
//! output. This stage is layout-agnostic: no measurement, no pagination, no
//! styling decisions beyond what the source carries. Presentation choices
//! (quote italics, bullet glyphs, rule glyphs) belong to the writers.

use log::debug;

use crate::model::{FlowBlock, FlowDocument, FlowKind, InlineRun, SourceDocument};
use crate::parser::{classify, parse_inline, LineKind};

/// Build a flow document from markdown source.
///
/// The result is rooted at a synthetic title block (default `"Untitled"`),
/// followed by one block per source line. Blank lines become spacer blocks,
/// one each, never collapsed.
pub fn build_flow(doc: &SourceDocument) -> FlowDocument {
    let mut blocks = Vec::with_capacity(doc.line_count() + 1);
    blocks.push(FlowBlock::new(
        FlowKind::Title,
        vec![InlineRun::plain(doc.display_title())],
    ));

    // An empty note exports as a title-only document rather than a title
    // plus one spacer for the empty source line.
    if doc.is_empty() {
        return FlowDocument { blocks };
    }

    for record in classify(&doc.content) {
        let block = match record.kind {
            LineKind::Heading1 => FlowBlock::new(FlowKind::Heading1, parse_inline(&record.text)),
            LineKind::Heading2 => FlowBlock::new(FlowKind::Heading2, parse_inline(&record.text)),
            LineKind::Heading3 => FlowBlock::new(FlowKind::Heading3, parse_inline(&record.text)),
            LineKind::Quote => FlowBlock::new(FlowKind::Quote, parse_inline(&record.text)),
            LineKind::ListItem => FlowBlock::new(FlowKind::ListItem, parse_inline(&record.text)),
            LineKind::Rule => FlowBlock::empty(FlowKind::Rule),
            LineKind::Blank => FlowBlock::empty(FlowKind::Blank),
            LineKind::Paragraph => FlowBlock::new(FlowKind::Paragraph, parse_inline(&record.text)),
        };
        blocks.push(block);
    }

    debug!("built flow document with {} blocks", blocks.len());
    FlowDocument { blocks }
}
