//! Heuristic person-name candidate discovery.
//!
//! # Responsibility
//! - Extract strings likely to contain a person's name from hard-scrubbed
//!   note text.
//! - Keep each heuristic an independently testable rule in a static table.
//!
//! # Invariants
//! - Rules are independent; a string may be produced by more than one rule
//!   and downstream token extraction deduplicates.
//! - Output order is not significant; callers treat it as a set.
//! - Filler values (`None`, `TBD`, relationship words, `Same`, `Call`)
//!   never become candidates.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Heuristic family that produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    /// `Name:`/`Patient:`-style labeled field values.
    LabeledField,
    /// Names following a family or relationship label.
    RelationalLabel,
    /// `<Name> is a NN-year-old` narrative incipit.
    NarrativeOpener,
    /// `Mr./Ms./Mrs./Mx./Miss`-prefixed names.
    Honorific,
}

/// One independently testable extraction rule.
pub struct CandidateRule {
    source: CandidateSource,
    pattern: &'static Lazy<Regex>,
}

impl CandidateRule {
    /// Returns the heuristic family of this rule.
    pub fn source(&self) -> CandidateSource {
        self.source
    }

    /// Runs this rule alone and returns its raw candidates.
    pub fn matches(&self, text: &str) -> Vec<String> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.name("name"))
            .map(|found| found.as_str().trim().to_string())
            .filter(|value| !is_filler(value))
            .collect()
    }
}

static LABELED_FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        // Joins are line-local so a capture never swallows the next line's label.
        r"\b(?:Name|Patient|Pt|Contact|Kin|POA|Proxy|Provider)[ \t]*[:\-#][ \t]*(?P<name>[A-Z][A-Za-z'-]*(?:,?[ \t]+[A-Z][A-Za-z'-]*){0,3})",
    )
    .expect("valid labeled field regex")
});

static RELATIONAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:Relation|Sister|Brother|Mother|Father|Spouse|Wife|Husband|Son|Daughter|Partner)\b[ \t]*[:\-]?[ \t]*(?P<name>[A-Z][A-Za-z'-]*(?:[ \t]+[A-Z][A-Za-z'-]*)?)",
    )
    .expect("valid relational label regex")
});

static NARRATIVE_OPENER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<name>[A-Z][A-Za-z'-]*(?:[ \t]+[A-Z][A-Za-z'-]*){0,2})(?:[ \t]+is|,)[ \t]+an?[ \t]+\d{1,3}[ -]*year[ -]*old",
    )
    .expect("valid narrative opener regex")
});

static HONORIFIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:Mrs|Miss|Mr|Ms|Mx)\.?[ \t]+(?P<name>[A-Z][A-Za-z'-]*)")
        .expect("valid honorific regex")
});

/// All extraction rules. Order carries no meaning; it only fixes log and
/// output ordering for determinism.
pub static CANDIDATE_RULES: &[CandidateRule] = &[
    CandidateRule {
        source: CandidateSource::LabeledField,
        pattern: &LABELED_FIELD_RE,
    },
    CandidateRule {
        source: CandidateSource::RelationalLabel,
        pattern: &RELATIONAL_RE,
    },
    CandidateRule {
        source: CandidateSource::NarrativeOpener,
        pattern: &NARRATIVE_OPENER_RE,
    },
    CandidateRule {
        source: CandidateSource::Honorific,
        pattern: &HONORIFIC_RE,
    },
];

/// Values a labeled or relational field carries instead of a real name.
static FILLER_VALUES: &[&str] = &[
    "none", "tbd", "same", "call", "unknown", "declined", "relation", "sister", "brother",
    "mother", "father", "spouse", "wife", "husband", "son", "daughter", "partner",
];

fn is_filler(value: &str) -> bool {
    FILLER_VALUES
        .iter()
        .any(|filler| filler.eq_ignore_ascii_case(value))
}

/// Runs every rule over `text` and concatenates the raw candidates.
///
/// Expects text that already went through the hard-identifier pass, so
/// label values replaced by placeholders no longer look like names.
pub fn find_candidates(text: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    for rule in CANDIDATE_RULES {
        let found = rule.matches(text);
        if !found.is_empty() {
            debug!(
                "event=name_candidates module=scan status=ok source={:?} count={}",
                rule.source(),
                found.len()
            );
        }
        candidates.extend(found);
    }
    candidates
}
