//!
//! # Common Components
//!
//! Codec traits (`ende`), the error type shared by every container, and the
//! wrapper-generating macro. The search primitive is re-exported from
//! `sortx_core::common`.
//!

/// A module for encoding and decoding traits.
pub mod ende;
pub mod error;
pub mod macros;

pub use sortx_core::common::*;
