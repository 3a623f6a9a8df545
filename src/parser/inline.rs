//! Inline span parser.
//!
//! Tokenizes a single line (already stripped of its block prefix) into styled
//! runs. The scan is a priority-ordered regex alternation: bold, italic,
//! inline code, link, then plain text up to the next delimiter. Unterminated
//! delimiters degrade to literal plain text; nothing here can fail.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::InlineRun;

/// Span alternation, tried in priority order at each position. The last two
/// branches make coverage total: any non-delimiter stretch becomes a plain
/// run, and a stray delimiter becomes a one-character literal.
fn span_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\*\*(.+?)\*\*|\*(.+?)\*|`(.+?)`|\[([^\]]+)\]\(([^)]*)\)|[^*`\[]+|[*`\[]")
            .expect("span pattern is valid")
    })
}

/// Parse a line into an ordered run sequence.
///
/// The runs cover the line with no gaps and no overlaps; concatenating their
/// texts yields the line with markdown delimiters stripped. Link syntax
/// `[text](url)` resolves to a plain run of `text` (the URL is discarded).
/// Empty input yields an empty sequence.
pub fn parse_inline(text: &str) -> Vec<InlineRun> {
    let mut runs: Vec<InlineRun> = Vec::new();

    for caps in span_pattern().captures_iter(text) {
        let run = if let Some(bold) = caps.get(1) {
            InlineRun::bold(bold.as_str())
        } else if let Some(italic) = caps.get(2) {
            InlineRun::italic(italic.as_str())
        } else if let Some(code) = caps.get(3) {
            InlineRun::code(code.as_str())
        } else if let Some(link_text) = caps.get(4) {
            InlineRun::plain(link_text.as_str())
        } else {
            InlineRun::plain(&caps[0])
        };

        // Runs are maximal: adjacent spans with identical flags merge.
        match runs.last_mut() {
            Some(last) if last.same_style(&run) => last.text.push_str(&run.text),
            _ => runs.push(run),
        }
    }

    runs
}

/// Flatten a line to plain text: markdown emphasis and link syntax reduced to
/// their inner text.
///
/// The fixed-layout path uses this before wrapping, so both export paths
/// strip delimiters identically.
pub fn plain_text(text: &str) -> String {
    parse_inline(text).iter().map(|r| r.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_yields_no_runs() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn test_plain_line_single_run() {
        let runs = parse_inline("just words");
        assert_eq!(runs, vec![InlineRun::plain("just words")]);
    }

    #[test]
    fn test_style_precedence() {
        let runs = parse_inline("**bold** and *italic* and `code`");
        assert_eq!(
            runs,
            vec![
                InlineRun::bold("bold"),
                InlineRun::plain(" and "),
                InlineRun::italic("italic"),
                InlineRun::plain(" and "),
                InlineRun::code("code"),
            ]
        );
    }

    #[test]
    fn test_run_coverage_reconstructs_stripped_text() {
        let line = "a **b** c *d* e `f` g [h](http://x) i";
        let flat: String = parse_inline(line).iter().map(|r| r.text.as_str()).collect();
        assert_eq!(flat, "a b c d e f g h i");
    }

    #[test]
    fn test_link_resolves_to_display_text() {
        let runs = parse_inline("[docs](https://example.com/docs)");
        assert_eq!(runs, vec![InlineRun::plain("docs")]);
    }

    #[test]
    fn test_unterminated_delimiters_degrade_to_literal() {
        assert_eq!(parse_inline("a * b"), vec![InlineRun::plain("a * b")]);
        assert_eq!(parse_inline("`open"), vec![InlineRun::plain("`open")]);
        assert_eq!(parse_inline("[no url"), vec![InlineRun::plain("[no url")]);
        assert_eq!(parse_inline("**"), vec![InlineRun::plain("**")]);
    }

    #[test]
    fn test_bold_wins_over_italic() {
        // `**x**` must not parse as italic `*x*` around a stray star.
        let runs = parse_inline("**x**");
        assert_eq!(runs, vec![InlineRun::bold("x")]);
    }

    #[test]
    fn test_adjacent_plain_runs_merge() {
        // Stray delimiter between words merges into one maximal plain run.
        let runs = parse_inline("price: 3*4");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "price: 3*4");
    }

    #[test]
    fn test_plain_text_flatten() {
        assert_eq!(plain_text("**a** [b](u) `c`"), "a b c");
        assert_eq!(plain_text("plain"), "plain");
    }
}
