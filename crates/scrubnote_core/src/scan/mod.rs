//! Detection passes over note text.
//!
//! # Responsibility
//! - Replace structurally recognizable identifiers by pattern alone.
//! - Discover person-name candidates and normalize them into tokens.
//!
//! # Invariants
//! - Every pass is a pure, total function over arbitrary input text.
//! - Name discovery expects text that already went through the hard
//!   identifier pass; running it earlier weakens the heuristics.

pub mod hard_identifiers;
pub mod name_candidates;
pub mod tokens;
