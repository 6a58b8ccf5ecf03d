//! Review view support for redacted documents.
//!
//! # Responsibility
//! - Align original and redacted text into same/changed segments for a
//!   human reviewer.
//!
//! # Invariants
//! - Presentation only; the redacted document stays the source of truth.

pub mod highlight;
