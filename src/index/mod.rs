//! Optional key index for the revenue join
//!
//! The join's default lookups are linear scans. This index is derived,
//! in-memory-only state built from the tables right before execution and
//! dropped with the query.
//!
//! # Invariants
//!
//! - Never the source of truth: every answer equals the scan's answer
//! - Read-only once built, shared by `&` across workers

mod keys;

pub use keys::{KeyIndex, KeyIndexStats};
