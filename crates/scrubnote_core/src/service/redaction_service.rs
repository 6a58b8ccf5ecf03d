//! Per-document redaction use-cases.
//!
//! # Responsibility
//! - Provide the document-level redact/safety-net APIs used by web
//!   handlers.
//! - Thread one token set through every field of a document.
//!
//! # Invariants
//! - Title and body are scrubbed with the same token set; a token
//!   discovered in either field is applied to both.
//! - Output is computed from the current text only; nothing is cached, so
//!   edited documents must simply be re-submitted.
//! - Log events carry counts and ids only, never note text or token
//!   values.

use crate::model::note::NoteDocument;
use crate::model::redaction::placeholders_in;
use crate::scan::hard_identifiers::{scrub_hard_identifiers, scrub_safety_net};
use crate::scan::name_candidates::find_candidates;
use crate::scan::tokens::extract_tokens;
use crate::scrub::global::scrub_names;
use log::info;
use std::collections::BTreeSet;

/// Redaction outcome for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactedNote {
    /// Document with `title`/`text` replaced by their redacted forms and
    /// `id`/`kind` carried through.
    pub note: NoteDocument,
    /// Name tokens discovered for this document; both fields were
    /// scrubbed with exactly this set.
    pub name_tokens: BTreeSet<String>,
}

/// Runs the full client-side pipeline over one document.
pub fn redact_note(note: &NoteDocument) -> RedactedNote {
    let hard_title = scrub_hard_identifiers(&note.title);
    let hard_text = scrub_hard_identifiers(&note.text);

    let mut candidates = find_candidates(&hard_title);
    candidates.extend(find_candidates(&hard_text));
    let name_tokens = extract_tokens(&candidates);

    let title = scrub_names(&hard_title, &name_tokens);
    let text = scrub_names(&hard_text, &name_tokens);

    info!(
        "event=note_redacted module=service status=ok note_id={} name_tokens={} placeholders={}",
        note.id,
        name_tokens.len(),
        placeholders_in(&title).len() + placeholders_in(&text).len()
    );

    RedactedNote {
        note: NoteDocument {
            id: note.id.clone(),
            title,
            text,
            kind: note.kind,
        },
        name_tokens,
    }
}

/// Redacts a collection of independent documents.
pub fn redact_notes(notes: &[NoteDocument]) -> Vec<RedactedNote> {
    notes.iter().map(redact_note).collect()
}

/// Re-runs the reduced hard-identifier pass server-side.
///
/// Defense-in-depth for documents that cross the trust boundary; name
/// discovery is deliberately absent because it requires the original,
/// pre-redaction text and has already happened client-side.
pub fn apply_safety_net(note: &NoteDocument) -> NoteDocument {
    let scrubbed = NoteDocument {
        id: note.id.clone(),
        title: scrub_safety_net(&note.title),
        text: scrub_safety_net(&note.text),
        kind: note.kind,
    };
    info!(
        "event=safety_net_applied module=service status=ok note_id={} placeholders={}",
        scrubbed.id,
        placeholders_in(&scrubbed.title).len() + placeholders_in(&scrubbed.text).len()
    );
    scrubbed
}
