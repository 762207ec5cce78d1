//! # sortx_core
//!
//! `sortx_core` provides the low-level building blocks for `sortx`: the
//! ordered search primitive and the raw sorted buffers built on it. It knows
//! nothing about encoding; the typed, serializable containers live in the
//! `sortx` crate.

#![deny(warnings)]
#![cfg_attr(test, allow(warnings))]

/// The ordered search primitive and normalization helpers.
///
/// Every container in this workspace locates elements through
/// [`common::search`], which reports either the position of a match or the
/// insertion point that keeps a slice ordered.
pub mod common;

/// Raw sorted buffers.
///
/// [`SortedVec`] is a duplicate-free ascending `Vec`, [`SortedKv`] keeps
/// keys and values in two parallel ascending buffers.
pub mod basic;

pub use basic::{sorted_kv::SortedKv, sorted_vec::SortedVec};

pub use common::{
    is_strictly_ascending, normalize, normalize_pairs, search, search_by, Found,
};
