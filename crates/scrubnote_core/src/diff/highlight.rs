//! Marker-based same/changed alignment of redacted text.
//!
//! # Responsibility
//! - Split redacted text into whitespace words and mark placeholder-shaped
//!   words as changed.
//!
//! # Invariants
//! - The pipeline only performs whole-token replacement, never insertion
//!   or reordering, so placeholder-shape alignment is lossless for
//!   highlighting purposes.
//! - Joining segments with single spaces reconstructs the redacted text
//!   under whitespace normalization; exact source whitespace is not
//!   preserved, except in the unchanged-document fast path.

use crate::model::redaction::{contains_placeholder, DiffSegment, DiffSegmentKind};

/// Aligns `original` against `redacted` into an ordered segment sequence.
///
/// Each placeholder-carrying word becomes its own `Changed` segment;
/// consecutive untouched words merge into one `Same` segment. When
/// nothing was redacted the original text is returned verbatim as a
/// single `Same` segment.
pub fn highlight_changes(original: &str, redacted: &str) -> Vec<DiffSegment> {
    if original == redacted {
        if original.is_empty() {
            return Vec::new();
        }
        return vec![DiffSegment {
            kind: DiffSegmentKind::Same,
            text: original.to_string(),
        }];
    }

    let mut segments: Vec<DiffSegment> = Vec::new();
    for word in redacted.split_whitespace() {
        let kind = if contains_placeholder(word) {
            DiffSegmentKind::Changed
        } else {
            DiffSegmentKind::Same
        };
        match segments.last_mut() {
            Some(last) if kind == DiffSegmentKind::Same && last.kind == kind => {
                last.text.push(' ');
                last.text.push_str(word);
            }
            _ => segments.push(DiffSegment {
                kind,
                text: word.to_string(),
            }),
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::highlight_changes;
    use crate::model::redaction::DiffSegmentKind;

    #[test]
    fn unchanged_text_is_one_verbatim_same_segment() {
        let text = "two  spaces\nand a newline";
        let segments = highlight_changes(text, text);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, DiffSegmentKind::Same);
        assert_eq!(segments[0].text, text);
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(highlight_changes("", "").is_empty());
    }

    #[test]
    fn placeholder_words_become_changed_segments() {
        let segments = highlight_changes(
            "call 555-123-4567 now",
            "call [REDACTED_PHONE] now",
        );
        let kinds: Vec<_> = segments.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiffSegmentKind::Same,
                DiffSegmentKind::Changed,
                DiffSegmentKind::Same
            ]
        );
        assert_eq!(segments[1].text, "[REDACTED_PHONE]");
    }

    #[test]
    fn consecutive_same_words_merge_and_changed_words_stay_separate() {
        let segments = highlight_changes(
            "Maria met Maria Lopez today",
            "[REDACTED_NAME] met [REDACTED_NAME] [REDACTED_NAME] today",
        );
        let kinds: Vec<_> = segments.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiffSegmentKind::Changed,
                DiffSegmentKind::Same,
                DiffSegmentKind::Changed,
                DiffSegmentKind::Changed,
                DiffSegmentKind::Same
            ]
        );
    }

    #[test]
    fn placeholder_with_trailing_punctuation_is_still_changed() {
        let segments = highlight_changes(
            "reach jane@example.com, thanks",
            "reach [REDACTED_EMAIL], thanks",
        );
        assert_eq!(segments[1].kind, DiffSegmentKind::Changed);
        assert_eq!(segments[1].text, "[REDACTED_EMAIL],");
    }

    #[test]
    fn segments_reconstruct_whitespace_normalized_redacted_text() {
        let redacted = "a  [REDACTED_ID]\nb c";
        let segments = highlight_changes("a 1234567\nb c", redacted);
        let joined = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let normalized = redacted.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(joined, normalized);
    }
}
