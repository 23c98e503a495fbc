//! Line-oriented TODO extraction.
//!
//! The `TodoExtractor` maps raw document text to the ordered list of TODO
//! items it contains. Wikilink markup is stripped first so annotations
//! inside link labels survive, then the text is reduced to plain lines by
//! the caller-supplied normalizer, and finally each line is matched against
//! the recognition rules.

use regex_lite::Regex;
use tracing::debug;

use crate::error::Result;
use crate::normalize::PlaintextNormalizer;
use crate::rules::{MARKER, RuleSet};

/// Extracts TODO annotations from document text.
pub struct TodoExtractor {
    rules: RuleSet,
    re_wikilink: Regex,
}

impl TodoExtractor {
    /// Create a new extractor.
    pub fn new() -> Result<Self> {
        Ok(Self {
            rules: RuleSet::new()?,
            re_wikilink: Regex::new(r"\[\[([^\[\]]*)\]\]")?,
        })
    }

    /// Extract TODO items from `raw`, in discovery order.
    ///
    /// Items are trimmed and never empty. A document with no matches yields
    /// an empty vector.
    pub fn extract(&self, raw: &str, normalizer: &dyn PlaintextNormalizer) -> Vec<String> {
        // `[[target]]` becomes `target` before normalization so link
        // punctuation cannot interfere with rule matching.
        let unlinked = self.re_wikilink.replace_all(raw, "$1");
        let plain = normalizer.normalize(&unlinked);
        let lines: Vec<&str> = plain.lines().map(str::trim).collect();

        let mut items = Vec::new();
        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];

            if let Some(item) = self.rules.apply(line) {
                items.push(item);
                i += 1;
                continue;
            }

            if line == MARKER {
                if i > 0 && !lines[i - 1].is_empty() {
                    // Bare marker borrows the previous line.
                    items.push(lines[i - 1].to_string());
                    i += 1;
                } else {
                    // No usable previous line: the following run of
                    // non-empty lines is the item list. The run is consumed
                    // so no line is captured twice.
                    i += 1;
                    while i < lines.len() && !lines[i].is_empty() {
                        items.push(lines[i].to_string());
                        i += 1;
                    }
                }
                continue;
            }

            i += 1;
        }

        debug!("extracted {} TODO items", items.len());
        items
    }
}
