//!
//! # Basic Data Structures
//!
//! Typed containers that wrap the raw sorted buffers from `sortx_core`.
//! On top of the raw lookups they provide iterator types, serde
//! integration and the JSON text codec defined in `common::ende`.
//!

pub mod ordered_map;
pub mod ordered_set;
