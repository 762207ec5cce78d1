//!
//! A `BTreeSet`-like structure backed by one sorted `Vec`.
//!
//! `OrderedSet` keeps its values ascending and duplicate-free in contiguous
//! memory. It encodes to a JSON array in ascending order, and decoding an
//! array re-establishes the order and drops duplicates.
//!
//! # Examples
//!
//! ```
//! use sortx::OrderedSet;
//!
//! let mut s = OrderedSet::from_values([4, 3, 4, 4]);
//! assert_eq!(s.values(), &[3, 4]);
//!
//! assert!(s.put(1));
//! assert!(!s.put(3));
//! assert!(s.delete(&4));
//!
//! assert_eq!(s.encode().unwrap(), "[1,3]");
//!
//! let s = OrderedSet::<u32>::decode("[7,8,1,1,1,1]").unwrap();
//! assert_eq!(s.values(), &[1, 7, 8]);
//! ```
//!


use crate::{
    common::{
        ende::{ValueDe, ValueEn},
        error::{Result, SortedError},
    },
    define_sorted_wrapper,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use sortx_core::SortedVec;
use std::{borrow::Borrow, iter::FusedIterator, slice, vec};
use tracing::{debug, trace};

define_sorted_wrapper! {
    /// An ordered, duplicate-free set stored in one contiguous buffer.
    ///
    /// Lookups are `O(log N)`, `put`/`delete` are `O(N)` because of the
    /// shift. Values are only ever handed out by shared reference, so the
    /// ordering invariant cannot be broken from the outside.
    pub struct OrderedSet<T> {
        inner: SortedVec<T>,
    }
}

impl<T> OrderedSet<T> {
    /// Values in ascending order.
    #[inline(always)]
    pub fn values(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Iterates in ascending order; every call starts a fresh pass.
    #[inline(always)]
    pub fn iter(&self) -> OrderedSetIter<'_, T> {
        OrderedSetIter {
            inner: self.inner.iter(),
        }
    }

    /// The smallest value.
    #[inline(always)]
    pub fn first(&self) -> Option<&T> {
        self.inner.first()
    }

    /// The largest value.
    #[inline(always)]
    pub fn last(&self) -> Option<&T> {
        self.inner.last()
    }

    #[inline(always)]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_vec()
    }
}

impl<T: Ord> OrderedSet<T> {
    /// Builds a set from an arbitrary collection: sort, then dedup.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let values = values.into_iter().collect::<Vec<_>>();
        let n = values.len();
        let inner = SortedVec::from_vec(values);
        if inner.len() < n {
            trace!(collapsed = n - inner.len(), "duplicate values collapsed");
        }
        Self { inner }
    }

    #[inline(always)]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.contains(value)
    }

    /// Returns the stored value equal to `value`.
    #[inline(always)]
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.get(value)
    }

    /// Adds `value`, returns `false` if it was already present.
    #[inline(always)]
    pub fn put(&mut self, value: T) -> bool {
        self.inner.put(value)
    }

    /// Removes `value`, returns whether it was present.
    #[inline(always)]
    pub fn delete<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.delete(value)
    }

    /// Removes and returns the stored value equal to `value`.
    #[inline(always)]
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.take(value)
    }
}

impl<T: Serialize> OrderedSet<T> {
    /// Encodes the set as a JSON array, ascending.
    pub fn encode(&self) -> Result<String> {
        self.try_encode_value().map_err(|e| {
            debug!(error = %e, "failed to encode an ordered set");
            SortedError::encode(e)
        })
    }
}

impl<T: Ord + DeserializeOwned> OrderedSet<T> {
    /// Decodes a JSON array; the values are sorted and deduplicated.
    pub fn decode(text: &str) -> Result<Self> {
        <Self as ValueDe>::decode_value(text).map_err(|e| {
            debug!(error = %e, "failed to decode an ordered set");
            SortedError::decode(e)
        })
    }
}

impl<T: Serialize> Serialize for OrderedSet<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for OrderedSet<T>
where
    T: Ord + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

impl<T: Ord> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: Ord> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|v| {
            self.put(v);
        });
    }
}

impl<T: Ord> From<Vec<T>> for OrderedSet<T> {
    fn from(v: Vec<T>) -> Self {
        Self::from_values(v)
    }
}

impl<T> AsRef<[T]> for OrderedSet<T> {
    fn as_ref(&self) -> &[T] {
        self.values()
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Ascending iterator over an [`OrderedSet`].
#[derive(Clone, Debug)]
pub struct OrderedSetIter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for OrderedSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIter<'_, T> {}
impl<T> FusedIterator for OrderedSetIter<'_, T> {}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = OrderedSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
