#![doc = include_str!("../README.md")]
#![deny(warnings)]
#![cfg_attr(test, allow(warnings))]

pub mod basic;
pub mod common;

pub use basic::{ordered_map::OrderedMap, ordered_set::OrderedSet};

pub use common::{
    ende::{KeyDe, KeyEn, ValueDe, ValueEn},
    error::{Result, SortedError},
};

pub use sortx_core::{self, *};
