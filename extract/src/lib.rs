//! # TODO Extraction
//!
//! This crate implements the text-scanning core of the todovault system.
//! It maps raw document text to the ordered list of TODO annotations the
//! document contains. It has no state and performs no I/O; the index crate
//! drives it from document lifecycle events.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       TODO Extraction                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  raw text ──► wikilink strip ──► PlaintextNormalizer            │
//! │                                        │                        │
//! │                                        ▼                        │
//! │  items ◄── bare-marker fallback ◄── RuleSet (per line)          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod extractor;
pub mod normalize;
pub mod rules;

pub use error::{ExtractError, Result};
pub use extractor::TodoExtractor;
pub use normalize::{IdentityNormalizer, MarkdownNormalizer, PlaintextNormalizer};
pub use rules::{MARKER, RuleSet};
