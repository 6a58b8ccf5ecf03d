//! Domain model for the de-identification pipeline.
//!
//! # Responsibility
//! - Define the note document shape exchanged with web handlers.
//! - Define the closed placeholder vocabulary emitted into redacted text.
//!
//! # Invariants
//! - Every placeholder written into note text belongs to `RedactionCategory`.
//! - Documents are transformed and returned, never persisted on this side.

pub mod note;
pub mod redaction;
