//! Plaintext normalization of marked-up document text.
//!
//! The extractor is line-oriented, so normalization must reduce formatting
//! markup to plain text while keeping line boundaries intact.

use pulldown_cmark::{Event, Options, Parser};

/// Reduces marked-up text to plain text.
///
/// Implementations must preserve textual content and line boundaries;
/// everything else about the markup dialect is up to them.
pub trait PlaintextNormalizer {
    /// Reduce `markup` to plain text.
    fn normalize(&self, markup: &str) -> String;
}

/// Pass-through normalizer for documents that are already plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityNormalizer;

impl PlaintextNormalizer for IdentityNormalizer {
    fn normalize(&self, markup: &str) -> String {
        markup.to_string()
    }
}

/// Markdown normalizer built on `pulldown-cmark`.
///
/// Each line is reduced independently: block-level parsing would merge
/// soft-wrapped paragraphs and lose the line structure the recognition
/// rules depend on.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownNormalizer;

impl PlaintextNormalizer for MarkdownNormalizer {
    fn normalize(&self, markup: &str) -> String {
        markup
            .lines()
            .map(strip_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Strip one line of markdown down to its text content.
fn strip_line(line: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut out = String::new();

    for event in Parser::new_ext(line, options) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            _ => {}
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identity_is_verbatim() {
        let text = "# not stripped\n**still bold**";
        assert_eq!(IdentityNormalizer.normalize(text), text);
    }

    #[test]
    fn test_markdown_strips_inline_formatting() {
        assert_eq!(
            MarkdownNormalizer.normalize("**buy** _milk_ and `eggs`"),
            "buy milk and eggs"
        );
    }

    #[test]
    fn test_markdown_strips_block_markers() {
        assert_eq!(MarkdownNormalizer.normalize("## Heading"), "Heading");
        assert_eq!(MarkdownNormalizer.normalize("- item one"), "item one");
        assert_eq!(MarkdownNormalizer.normalize("> quoted"), "quoted");
    }

    #[test]
    fn test_markdown_preserves_line_boundaries() {
        let plain = MarkdownNormalizer.normalize("first\nsecond\n\nfourth");
        assert_eq!(plain, "first\nsecond\n\nfourth");
    }

    #[test]
    fn test_markdown_strips_task_list_marker() {
        assert_eq!(
            MarkdownNormalizer.normalize("- [ ] call mom"),
            "call mom"
        );
    }
}
