//! Recognition rules for TODO annotations.
//!
//! A line is matched against the rules in a fixed priority order and the
//! first rule that yields a non-empty capture wins. The order is
//! significant: `"TODO: fix this TODO"` must resolve through the labeled
//! rule, not the trailing one.

use regex_lite::Regex;

use crate::error::Result;

/// The literal token that triggers recognition. Case-sensitive.
pub const MARKER: &str = "TODO";

/// The ordered set of recognition rules.
///
/// Patterns are compiled once at construction and reused for every line.
pub struct RuleSet {
    re_labeled: Regex,
    re_trailing: Regex,
    re_embedded: Regex,
}

impl RuleSet {
    /// Compile the rule patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Marker, optional whitespace, colon, then the item text.
            re_labeled: Regex::new(r"TODO\s*:(.*)$")?,
            // Line ends with the marker; text (if any) is separated from it
            // by whitespace.
            re_trailing: Regex::new(r"^(?:(.*)\s)?TODO$")?,
            // Marker bounded by whitespace or boundary punctuation amid
            // other text.
            re_embedded: Regex::new(
                r#"(^|[\s(\[{'".,;:!?*_~-])TODO([\s)\]}'".,;:!?*_~-]|$)"#,
            )?,
        })
    }

    /// Labeled rule: capture everything after the colon. Any prefix before
    /// the marker is discarded.
    pub fn labeled(&self, line: &str) -> Option<String> {
        let caps = self.re_labeled.captures(line)?;
        non_empty(caps.get(1)?.as_str())
    }

    /// Trailing rule: capture everything before the marker at end of line.
    pub fn trailing(&self, line: &str) -> Option<String> {
        let caps = self.re_trailing.captures(line)?;
        non_empty(caps.get(1)?.as_str())
    }

    /// Embedded rule: the marker sits inside other text; capture the whole
    /// line, marker included. Never matches the bare marker itself, which
    /// is handled by the fallback in the extractor.
    pub fn embedded(&self, line: &str) -> Option<String> {
        if line == MARKER {
            return None;
        }
        if self.re_embedded.is_match(line) {
            non_empty(line)
        } else {
            None
        }
    }

    /// Apply the rules in priority order; the first non-empty capture wins.
    pub fn apply(&self, line: &str) -> Option<String> {
        self.labeled(line)
            .or_else(|| self.trailing(line))
            .or_else(|| self.embedded(line))
    }
}

/// Trim a capture; an empty capture means the rule did not match.
fn non_empty(capture: &str) -> Option<String> {
    let trimmed = capture.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rules() -> RuleSet {
        RuleSet::new().unwrap()
    }

    #[test]
    fn test_labeled_captures_after_colon() {
        let r = rules();
        assert_eq!(r.labeled("TODO: buy milk"), Some("buy milk".to_string()));
        assert_eq!(r.labeled("TODO : buy milk"), Some("buy milk".to_string()));
        // Prefix before the marker is discarded.
        assert_eq!(
            r.labeled("note to self TODO: call back"),
            Some("call back".to_string())
        );
    }

    #[test]
    fn test_labeled_empty_capture_is_no_match() {
        assert_eq!(rules().labeled("TODO:"), None);
        assert_eq!(rules().labeled("TODO:   "), None);
    }

    #[test]
    fn test_trailing_captures_before_marker() {
        let r = rules();
        assert_eq!(
            r.trailing("finish the report TODO"),
            Some("finish the report".to_string())
        );
        assert_eq!(r.trailing("TODO"), None);
        // No separating whitespace, no match.
        assert_eq!(r.trailing("reportTODO"), None);
    }

    #[test]
    fn test_embedded_captures_whole_line() {
        let r = rules();
        assert_eq!(
            r.embedded("please (TODO) check this"),
            Some("please (TODO) check this".to_string())
        );
        assert_eq!(
            r.embedded("TODO buy milk"),
            Some("TODO buy milk".to_string())
        );
        assert_eq!(r.embedded("TODO"), None);
        assert_eq!(r.embedded("pseudoTODOs everywhere"), None);
    }

    #[test]
    fn test_priority_labeled_over_trailing() {
        // Satisfies both A and B; A is tried first.
        assert_eq!(
            rules().apply("TODO: buy milk TODO"),
            Some("buy milk TODO".to_string())
        );
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let r = rules();
        assert_eq!(r.apply("todo: buy milk"), None);
        assert_eq!(r.apply("finish the report Todo"), None);
    }
}
