//! De-identification pipeline for free-text clinical notes.
//! This crate is the single source of truth for redaction behavior.

pub mod diff;
pub mod logging;
pub mod model;
pub mod scan;
pub mod scrub;
pub mod service;

pub use diff::highlight::highlight_changes;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{NoteDocument, NoteId, NoteKind};
pub use model::redaction::{
    contains_placeholder, placeholders_in, DiffSegment, DiffSegmentKind, RedactionCategory,
    CATEGORIES,
};
pub use scan::hard_identifiers::{scrub_hard_identifiers, scrub_safety_net};
pub use scan::name_candidates::{find_candidates, CandidateRule, CandidateSource, CANDIDATE_RULES};
pub use scan::tokens::extract_tokens;
pub use scrub::global::scrub_names;
pub use scrub::object_fields::scrub_banned_fields;
pub use service::redaction_service::{apply_safety_net, redact_note, redact_notes, RedactedNote};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
