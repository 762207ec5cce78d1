//!
//! # Raw Sorted Buffers
//!
//! Contiguous, ascending storage shared by the typed containers in `sortx`.
//! Lookups are binary searches, inserts and removals shift the tail.
//!

/// A duplicate-free ascending buffer.
pub mod sorted_vec;

/// Parallel key/value buffers ordered by key.
pub mod sorted_kv;
