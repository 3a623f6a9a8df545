//! Line-oriented block classifier.

use serde::{Deserialize, Serialize};

/// Block kind of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// `# ` heading.
    Heading1,
    /// `## ` heading.
    Heading2,
    /// `### ` heading.
    Heading3,
    /// `> ` block quote.
    Quote,
    /// `- ` or `* ` list item.
    ListItem,
    /// Line starting with `---`.
    Rule,
    /// Empty or all-whitespace line.
    Blank,
    /// Anything else.
    Paragraph,
}

/// One classified source line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    /// Block kind.
    pub kind: LineKind,

    /// Line text with its block-prefix marker stripped. Empty for Rule and
    /// Blank lines.
    pub text: String,

    /// The unmodified source line. Joining `raw` values with `\n`
    /// reconstructs the document content exactly.
    pub raw: String,
}

/// Classify every line of a document, in source order.
///
/// Produces exactly one record per line, blank lines included. Classification
/// is a pure function of each line on its own; there is no lookahead across
/// lines.
pub fn classify(content: &str) -> Vec<LineRecord> {
    content.split('\n').map(classify_line).collect()
}

/// Classify a single line.
///
/// Prefixes are checked in priority order: `### `, `## `, `# `, `> `,
/// `- `/`* `, `---`, blank, paragraph. The matched prefix is stripped into
/// `text`.
pub fn classify_line(line: &str) -> LineRecord {
    let (kind, text) = if let Some(rest) = line.strip_prefix("### ") {
        (LineKind::Heading3, rest)
    } else if let Some(rest) = line.strip_prefix("## ") {
        (LineKind::Heading2, rest)
    } else if let Some(rest) = line.strip_prefix("# ") {
        (LineKind::Heading1, rest)
    } else if let Some(rest) = line.strip_prefix("> ") {
        (LineKind::Quote, rest)
    } else if let Some(rest) = line.strip_prefix("- ") {
        (LineKind::ListItem, rest)
    } else if let Some(rest) = line.strip_prefix("* ") {
        (LineKind::ListItem, rest)
    } else if line.starts_with("---") {
        (LineKind::Rule, "")
    } else if line.trim().is_empty() {
        (LineKind::Blank, "")
    } else {
        (LineKind::Paragraph, line)
    };

    LineRecord {
        kind,
        text: text.to_string(),
        raw: line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_prefix_stripping() {
        let rec = classify_line("### Title");
        assert_eq!(rec.kind, LineKind::Heading3);
        assert_eq!(rec.text, "Title");

        let rec = classify_line("## Sub");
        assert_eq!(rec.kind, LineKind::Heading2);
        assert_eq!(rec.text, "Sub");

        let rec = classify_line("# Top");
        assert_eq!(rec.kind, LineKind::Heading1);
        assert_eq!(rec.text, "Top");
    }

    #[test]
    fn test_quote_and_list() {
        let rec = classify_line("> quoted");
        assert_eq!(rec.kind, LineKind::Quote);
        assert_eq!(rec.text, "quoted");

        let rec = classify_line("- item");
        assert_eq!(rec.kind, LineKind::ListItem);
        assert_eq!(rec.text, "item");

        let rec = classify_line("* item");
        assert_eq!(rec.kind, LineKind::ListItem);
        assert_eq!(rec.text, "item");
    }

    #[test]
    fn test_rule_allows_trailing_characters() {
        assert_eq!(classify_line("---").kind, LineKind::Rule);
        assert_eq!(classify_line("-----").kind, LineKind::Rule);
        assert_eq!(classify_line("--- fin").kind, LineKind::Rule);
        assert_eq!(classify_line("---").text, "");
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify_line("").kind, LineKind::Blank);
        assert_eq!(classify_line("   \t").kind, LineKind::Blank);
    }

    #[test]
    fn test_missing_space_is_paragraph() {
        // A heading marker without the trailing space is not a heading.
        assert_eq!(classify_line("#Header").kind, LineKind::Paragraph);
        assert_eq!(classify_line(">quote").kind, LineKind::Paragraph);
        assert_eq!(classify_line("-item").kind, LineKind::Paragraph);
    }

    #[test]
    fn test_deep_heading_falls_back() {
        // Only three heading levels are supported.
        let rec = classify_line("#### Deep");
        assert_eq!(rec.kind, LineKind::Paragraph);
        assert_eq!(rec.text, "#### Deep");
    }

    #[test]
    fn test_line_coverage_and_reconstruction() {
        let content = "# A\n\n> b\n- c\n---\ntext";
        let records = classify(content);
        assert_eq!(records.len(), 6);

        let rebuilt: Vec<&str> = records.iter().map(|r| r.raw.as_str()).collect();
        assert_eq!(rebuilt.join("\n"), content);
    }

    #[test]
    fn test_empty_content_is_one_blank_line() {
        let records = classify("");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, LineKind::Blank);
    }
}
