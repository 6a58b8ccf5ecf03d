//! Pipeline orchestration services.
//!
//! # Responsibility
//! - Run the per-document stage sequence in its contractual order.
//! - Keep callers decoupled from individual pass internals.
//!
//! # Invariants
//! - Stage order within one document is fixed: hard identifiers, then
//!   name discovery, then token extraction, then the global scrub.
//! - Documents are independent; batch processing has no cross-document
//!   state.

pub mod redaction_service;
