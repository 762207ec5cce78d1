//!
//! A key-ordered map stored as two parallel buffers.
//!
//! Keys and values live in separate `Vec`s so a lookup only walks key
//! memory. `keys[i]` always owns `values[i]`.
//!
//! # Examples
//!
//! ```
//! use sortx_core::SortedKv;
//!
//! let mut m = SortedKv::new();
//! assert!(m.put(4712, "bar"));
//! assert!(m.put(4711, "foo"));
//! assert!(!m.put(4711, "hej"));
//!
//! assert_eq!(m.keys(), &[4711, 4712]);
//! assert_eq!(m.values(), &["hej", "bar"]);
//!
//! for (_, v) in m.iter_mut() {
//!     *v = "x";
//! }
//! assert_eq!(m.get(&4712), Some(&"x"));
//! ```
//!

#[cfg(test)]
mod test;

use crate::common::{normalize_pairs, search, Found};
use std::{borrow::Borrow, iter::Zip, slice, vec};

pub type Iter<'a, K, V> = Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>;
pub type IterMut<'a, K, V> = Zip<slice::Iter<'a, K>, slice::IterMut<'a, V>>;
pub type IntoIter<K, V> = Zip<vec::IntoIter<K>, vec::IntoIter<V>>;

/// Parallel key/value buffers, ascending by key, keys unique.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortedKv<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> SortedKv<K, V> {
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            keys: Vec::with_capacity(cap),
            values: Vec::with_capacity(cap),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys, ascending.
    #[inline(always)]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Values, positionally aligned with [`keys`](Self::keys).
    #[inline(always)]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Values can be rewritten freely, the order is carried by the keys.
    #[inline(always)]
    pub fn values_mut(&mut self) -> &mut [V] {
        &mut self.values
    }

    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.keys.iter().zip(self.values.iter())
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.keys.iter().zip(self.values.iter_mut())
    }

    #[inline(always)]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.keys.first().zip(self.values.first())
    }

    #[inline(always)]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.keys.last().zip(self.values.last())
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    /// Splits the map back into its two buffers.
    #[inline(always)]
    pub fn into_parts(self) -> (Vec<K>, Vec<V>) {
        (self.keys, self.values)
    }
}

impl<K: Ord, V> SortedKv<K, V> {
    /// Builds a map from arbitrary pairs, the last value of a repeated key wins.
    #[inline(always)]
    pub fn from_pairs(pairs: Vec<(K, V)>) -> Self {
        let (keys, values) = normalize_pairs(pairs);
        Self { keys, values }
    }

    /// Locates `key` in the key buffer, see [`crate::common::search`].
    #[inline(always)]
    pub fn search<Q>(&self, key: &Q) -> Found
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search(&self.keys, key)
    }

    #[inline(always)]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).1
    }

    #[inline(always)]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(key) {
            (idx, true) => Some(&self.values[idx]),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(key) {
            (idx, true) => Some(&mut self.values[idx]),
            _ => None,
        }
    }

    /// Sets `value` for `key`.
    ///
    /// An existing key has its value overwritten in place and `false` is
    /// returned. A new key is inserted at its sorted position and `true`
    /// is returned.
    pub fn put(&mut self, key: K, value: V) -> bool {
        let (idx, found) = self.search(&key);
        if found {
            self.values[idx] = value;
            return false;
        }

        // both buffers have spare room, so neither insert can reallocate
        // and leave the pair half-written
        self.keys.reserve(1);
        self.values.reserve(1);
        self.keys.insert(idx, key);
        self.values.insert(idx, value);

        true
    }

    /// Removes `key` and its value, returns the value if the key existed.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(key) {
            (idx, true) => {
                self.keys.remove(idx);
                Some(self.values.remove(idx))
            }
            _ => None,
        }
    }

    #[inline(always)]
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove(key).is_some()
    }
}

impl<K, V> Default for SortedKv<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> IntoIterator for SortedKv<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.values)
    }
}
