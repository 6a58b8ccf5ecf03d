//! Clinical note document model.
//!
//! # Responsibility
//! - Define the canonical note shape the pipeline transforms.
//! - Provide constructors for generated and caller-owned identities.
//!
//! # Invariants
//! - `id` is opaque and survives redaction unchanged.
//! - Redaction replaces `title`/`text` only; `kind` is carried through.
//! - Redaction output is valid only for the exact text it was computed
//!   from; an edit invalidates previously computed output.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque stable identifier for a note document.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = String;

/// Clinical note category hint supplied by the caller.
///
/// The pipeline never branches on this; it exists so redacted documents
/// keep the same shape the caller handed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    /// Day-to-day progress note.
    Progress,
    /// Specialist consult note.
    Consult,
    /// Discharge summary.
    Discharge,
    /// Shift handoff note.
    Handoff,
}

/// Free-text clinical note owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDocument {
    /// Opaque caller-owned identifier.
    pub id: NoteId,
    /// Short display title; scrubbed with the same token set as `text`.
    pub title: String,
    /// Free-text note body.
    pub text: String,
    /// Optional note category, untouched by redaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NoteKind>,
}

impl NoteDocument {
    /// Creates a note with a generated stable ID.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, text)
    }

    /// Creates a note with a caller-provided stable ID.
    ///
    /// Used when identity already exists on the caller side.
    pub fn with_id(
        id: impl Into<NoteId>,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: text.into(),
            kind: None,
        }
    }

    /// Sets the note category hint.
    pub fn with_kind(mut self, kind: NoteKind) -> Self {
        self.kind = Some(kind);
        self
    }
}
