//! Redaction passes applied to whole documents and request payloads.
//!
//! # Responsibility
//! - Apply the document token set (plus the honorific safety net) to text.
//! - Strip banned structured field names from JSON payloads at the
//!   request boundary.
//!
//! # Invariants
//! - Text passes are pure and total; unmatched text is returned unchanged.
//! - Title and body of one document must be scrubbed with the same token
//!   set; scrubbing only one field leaks information.

pub mod global;
pub mod object_fields;
