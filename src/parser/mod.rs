//! Markdown parsing: line-oriented block classification and inline spans.
//!
//! The export engine re-parses markdown with its own deliberately small
//! grammar; it does not share a parser with any live-preview renderer. Both
//! export paths consume the same classifier output, so a line always carries
//! the same kind regardless of the target format.

mod block;
mod inline;

pub use block::{classify, classify_line, LineKind, LineRecord};
pub use inline::{parse_inline, plain_text};
