//! Raw markdown writer.

use crate::model::SourceDocument;

/// Produce the markdown artifact: the source content, byte for byte.
///
/// This path never parses or rewrites anything, so exporting and reading the
/// artifact back yields content identical to the input.
pub fn to_markdown(doc: &SourceDocument) -> Vec<u8> {
    doc.content.clone().into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_idempotence() {
        let content = "# Title\n\nsome **bold** text\n";
        let doc = SourceDocument::new("t", content);
        let bytes = to_markdown(&doc);
        assert_eq!(String::from_utf8(bytes).unwrap(), content);
    }

    #[test]
    fn test_empty_content_yields_empty_bytes() {
        let doc = SourceDocument::new("", "");
        assert!(to_markdown(&doc).is_empty());
    }
}
