//!
//! A duplicate-free, ascending buffer of values.
//!
//! `SortedVec` keeps its elements in one contiguous `Vec`, so lookups are a
//! binary search over adjacent memory. Inserts and removals shift the tail.
//!
//! # Examples
//!
//! ```
//! use sortx_core::SortedVec;
//!
//! let mut v = SortedVec::from_vec(vec![4, 3, 4, 4]);
//! assert_eq!(v.as_slice(), &[3, 4]);
//!
//! assert!(v.put(1));
//! assert!(!v.put(4));
//! assert_eq!(v.as_slice(), &[1, 3, 4]);
//!
//! assert!(v.delete(&3));
//! assert!(!v.delete(&3));
//! ```
//!


use crate::common::{normalize, search, Found};
use std::{borrow::Borrow, slice, vec};

/// An ascending, duplicate-free `Vec`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortedVec<T> {
    data: Vec<T>,
}

impl<T> SortedVec<T> {
    /// Creates an empty buffer.
    #[inline(always)]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty buffer with room for `cap` elements.
    #[inline(always)]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            data: Vec::with_capacity(cap),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only view, ascending.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline(always)]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline(always)]
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    #[inline(always)]
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline(always)]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Ord> SortedVec<T> {
    /// Builds a buffer from arbitrary input: sort, then dedup.
    #[inline(always)]
    pub fn from_vec(v: Vec<T>) -> Self {
        Self { data: normalize(v) }
    }

    /// Locates `value`, see [`crate::common::search`].
    #[inline(always)]
    pub fn search<Q>(&self, value: &Q) -> Found
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search(&self.data, value)
    }

    #[inline(always)]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(value).1
    }

    /// Returns the stored element equal to `value`.
    #[inline(always)]
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(value) {
            (idx, true) => Some(&self.data[idx]),
            _ => None,
        }
    }

    /// Inserts `value` at its sorted position.
    ///
    /// Returns `false` and leaves the buffer untouched if an equal
    /// element is already present.
    pub fn put(&mut self, value: T) -> bool {
        let (idx, found) = self.search(&value);
        if found {
            return false;
        }
        self.data.insert(idx, value);
        true
    }

    /// Removes the element equal to `value`, returns whether it existed.
    #[inline(always)]
    pub fn delete<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the element equal to `value`.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(value) {
            (idx, true) => Some(self.data.remove(idx)),
            _ => None,
        }
    }
}

impl<T> Default for SortedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AsRef<[T]> for SortedVec<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> IntoIterator for SortedVec<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
