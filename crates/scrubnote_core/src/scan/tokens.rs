//! Candidate normalization into the document redaction token set.
//!
//! # Responsibility
//! - Split raw candidate strings into atomic word tokens.
//! - Filter tokens through the stopword/role-word blocklist and the
//!   minimum-length rule.
//!
//! # Invariants
//! - Pure and idempotent: the same candidates always yield the same set.
//! - Tokens keep their discovered casing; matching happens
//!   case-insensitively downstream.
//! - A token is at least 3 characters and contains a letter.

use std::collections::BTreeSet;

const MIN_TOKEN_CHARS: usize = 3;

/// Words that must never become redaction tokens: relationship labels,
/// honorifics, clinical role/section words, month names, and the
/// pronouns/stopwords the narrative-opener heuristic can capture.
static BLOCKED_WORDS: &[&str] = &[
    // relationship labels
    "relation", "sister", "brother", "mother", "father", "spouse", "wife", "husband", "son",
    "daughter", "partner",
    // honorifics
    "mr", "mrs", "ms", "mx", "miss", "dr", "doctor",
    // clinical role and section words
    "patient", "provider", "contact", "kin", "poa", "proxy", "heme", "onc", "labs", "date",
    // month names
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
    // narrative stopwords
    "she", "her", "his", "him", "they", "the", "this",
];

/// Normalizes raw candidates into the document-scoped token set.
///
/// Tokens discovered anywhere in a document must be applied to every
/// field of that document; callers union the output across fields before
/// scrubbing.
pub fn extract_tokens(candidates: &[String]) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for candidate in candidates {
        for word in candidate.split(|c: char| c.is_whitespace() || c == ',') {
            let cleaned: String = word
                .chars()
                .filter(|c| c.is_alphabetic() || *c == '-')
                .collect();
            let cleaned = cleaned.trim_matches('-');
            if cleaned.chars().count() < MIN_TOKEN_CHARS {
                continue;
            }
            if !cleaned.chars().any(char::is_alphabetic) {
                continue;
            }
            if is_blocked(cleaned) {
                continue;
            }
            tokens.insert(cleaned.to_string());
        }
    }
    tokens
}

fn is_blocked(word: &str) -> bool {
    let lowered = word.to_lowercase();
    BLOCKED_WORDS.iter().any(|blocked| *blocked == lowered)
}
