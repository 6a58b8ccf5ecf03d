//! Redaction vocabulary and diff presentation types.
//!
//! # Responsibility
//! - Define the closed set of categories the pipeline can redact.
//! - Render and parse the exact placeholder strings emitted into text.
//!
//! # Invariants
//! - Placeholders are emitted verbatim from `placeholder()`; downstream
//!   consumers match on these strings and nothing else.
//! - `from_placeholder` accepts only the closed vocabulary.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Closed set of information categories the pipeline redacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionCategory {
    /// Email addresses.
    Email,
    /// `http(s)://` URLs.
    Url,
    /// Phone and fax numbers.
    Phone,
    /// Record identifiers: SSN-shaped, labeled MRN/account values, and
    /// bare long digit runs.
    Id,
    /// Remainder of a line carrying a date-of-birth label.
    DobLine,
    /// US-style street addresses.
    Address,
    /// Person names discovered by heuristics or honorific context.
    Name,
}

/// Every category in the placeholder vocabulary.
pub const CATEGORIES: [RedactionCategory; 7] = [
    RedactionCategory::Email,
    RedactionCategory::Url,
    RedactionCategory::Phone,
    RedactionCategory::Id,
    RedactionCategory::DobLine,
    RedactionCategory::Address,
    RedactionCategory::Name,
];

impl RedactionCategory {
    /// Returns the exact placeholder emitted into redacted text.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Email => "[REDACTED_EMAIL]",
            Self::Url => "[REDACTED_URL]",
            Self::Phone => "[REDACTED_PHONE]",
            Self::Id => "[REDACTED_ID]",
            Self::DobLine => "[REDACTED_DOB_LINE]",
            Self::Address => "[REDACTED_ADDRESS]",
            Self::Name => "[REDACTED_NAME]",
        }
    }

    /// Parses a placeholder string back to its category.
    ///
    /// Returns `None` for anything outside the closed vocabulary.
    pub fn from_placeholder(value: &str) -> Option<Self> {
        CATEGORIES
            .iter()
            .copied()
            .find(|category| category.placeholder() == value)
    }
}

static PLACEHOLDER_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[REDACTED_[A-Z_]+\]").expect("valid placeholder shape regex"));

/// Returns every placeholder-shaped substring of `text`, in text order.
///
/// Shape-matched, not vocabulary-matched; pair with
/// [`RedactionCategory::from_placeholder`] to verify vocabulary membership.
pub fn placeholders_in(text: &str) -> Vec<&str> {
    PLACEHOLDER_SHAPE_RE
        .find_iter(text)
        .map(|found| found.as_str())
        .collect()
}

/// Returns whether `text` contains a placeholder-shaped substring.
pub fn contains_placeholder(text: &str) -> bool {
    PLACEHOLDER_SHAPE_RE.is_match(text)
}

/// Kind of one diff segment in the review view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffSegmentKind {
    /// Text carried over from the original unchanged.
    Same,
    /// Text the pipeline replaced with a placeholder.
    Changed,
}

/// One aligned run of redacted text for UI review.
///
/// Presentation artifact only; the redacted document stays the source of
/// truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    /// Whether this run survived redaction unchanged.
    pub kind: DiffSegmentKind,
    /// Segment text as it appears in the redacted document.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::{contains_placeholder, placeholders_in, RedactionCategory, CATEGORIES};

    #[test]
    fn placeholder_round_trips_for_every_category() {
        for category in CATEGORIES {
            assert_eq!(
                RedactionCategory::from_placeholder(category.placeholder()),
                Some(category)
            );
        }
    }

    #[test]
    fn from_placeholder_rejects_unknown_tags() {
        assert_eq!(RedactionCategory::from_placeholder("[REDACTED_FOO]"), None);
        assert_eq!(RedactionCategory::from_placeholder("[REDACTED_NAME"), None);
        assert_eq!(RedactionCategory::from_placeholder("redacted_name"), None);
    }

    #[test]
    fn placeholders_in_finds_embedded_tokens_in_order() {
        let text = "call [REDACTED_PHONE], then [REDACTED_NAME].";
        assert_eq!(
            placeholders_in(text),
            vec!["[REDACTED_PHONE]", "[REDACTED_NAME]"]
        );
        assert!(contains_placeholder(text));
        assert!(!contains_placeholder("nothing redacted here"));
    }
}
