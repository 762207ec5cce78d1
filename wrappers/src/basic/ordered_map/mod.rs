//!
//! A `BTreeMap`-like structure backed by two parallel sorted `Vec`s.
//!
//! `OrderedMap` keeps keys and values in separate contiguous buffers, so a
//! lookup only touches key memory. It encodes to a JSON object whose fields
//! follow ascending key order, whatever the insertion order was.
//!
//! # Examples
//!
//! ```
//! use sortx::OrderedMap;
//!
//! let mut m = OrderedMap::new();
//!
//! // Insert key-value pairs
//! assert!(m.put(4711, "foo".to_owned()));
//! assert!(m.put(4713, "hej".to_owned()));
//! assert!(m.put(4712, "bar".to_owned()));
//!
//! // Overwrite in place
//! assert!(!m.put(4713, "hej!".to_owned()));
//! assert_eq!(m.get(&4713).map(|v| v.as_str()), Some("hej!"));
//!
//! // Update values while walking the keys
//! for (_, v) in m.iter_mut() {
//!     v.make_ascii_uppercase();
//! }
//!
//! assert_eq!(
//!     m.encode().unwrap(),
//!     r#"{"4711":"FOO","4712":"BAR","4713":"HEJ!"}"#
//! );
//!
//! // Remove a key-value pair
//! assert!(m.delete(&4712));
//! assert!(!m.delete(&4712));
//! assert_eq!(m.keys(), &[4711, 4713]);
//! ```
//!


use crate::{
    common::{
        ende::{KeyDe, KeyEn, ValueDe, ValueEn},
        error::{Result, SortedError},
    },
    define_sorted_wrapper,
};
use serde::{
    de::{self, DeserializeOwned, MapAccess, Visitor},
    ser::{self, SerializeMap},
    Deserialize, Deserializer, Serialize, Serializer,
};
use sortx_core::{basic::sorted_kv, SortedKv};
use std::{borrow::Borrow, fmt, iter::FusedIterator, marker::PhantomData};
use tracing::{debug, trace};

define_sorted_wrapper! {
    /// An ordered map stored as parallel key/value buffers.
    ///
    /// Keys are unique and ascending. Lookups are `O(log N)`,
    /// `put`/`delete` of a new key are `O(N)` because of the shift.
    ///
    /// Values may be mutated in place through [`get_mut`](Self::get_mut),
    /// [`iter_mut`](Self::iter_mut) or [`values_mut`](Self::values_mut);
    /// keys are only ever handed out by shared reference.
    pub struct OrderedMap<K, V> {
        inner: SortedKv<K, V>,
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Keys in ascending order.
    #[inline(always)]
    pub fn keys(&self) -> &[K] {
        self.inner.keys()
    }

    /// Values, positionally aligned with [`keys`](Self::keys).
    #[inline(always)]
    pub fn values(&self) -> &[V] {
        self.inner.values()
    }

    /// Mutable view of the values, aligned with [`keys`](Self::keys).
    #[inline(always)]
    pub fn values_mut(&mut self) -> &mut [V] {
        self.inner.values_mut()
    }

    /// Iterates `(key, value)` pairs in ascending key order.
    #[inline(always)]
    pub fn iter(&self) -> OrderedMapIter<'_, K, V> {
        OrderedMapIter {
            inner: self.inner.iter(),
        }
    }

    /// Iterates `(key, &mut value)` pairs in ascending key order.
    ///
    /// Writes through the yielded references land in the map. The map
    /// stays borrowed for the whole pass, so no key can be added or
    /// removed while it runs.
    #[inline(always)]
    pub fn iter_mut(&mut self) -> OrderedMapIterMut<'_, K, V> {
        OrderedMapIterMut {
            inner: self.inner.iter_mut(),
        }
    }

    /// Retrieves the entry with the smallest key.
    #[inline(always)]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.inner.first()
    }

    /// Retrieves the entry with the largest key.
    #[inline(always)]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.inner.last()
    }

    /// Splits the map into its key and value buffers.
    #[inline(always)]
    pub fn into_parts(self) -> (Vec<K>, Vec<V>) {
        self.inner.into_parts()
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Builds a map from arbitrary pairs.
    ///
    /// A repeated key keeps its last value, as repeated [`put`](Self::put)
    /// calls would.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        let pairs = pairs.into_iter().collect::<Vec<_>>();
        let n = pairs.len();
        let inner = SortedKv::from_pairs(pairs);
        if inner.len() < n {
            trace!(collapsed = n - inner.len(), "repeated keys collapsed");
        }
        Self { inner }
    }

    /// Checks if the map contains the given key.
    #[inline(always)]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Retrieves the value stored for `key`.
    #[inline(always)]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.get(key)
    }

    /// Retrieves the value stored for `key`, or `default` if there is none.
    #[inline(always)]
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).unwrap_or(default)
    }

    /// Retrieves a mutable reference to the value stored for `key`.
    #[inline(always)]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.get_mut(key)
    }

    /// Sets `value` for `key`.
    ///
    /// Returns `true` if the key is new. An existing key keeps its slot
    /// and only has its value replaced.
    #[inline(always)]
    pub fn put(&mut self, key: K, value: V) -> bool {
        self.inner.put(key, value)
    }

    /// Removes `key` and its value, returns whether the key was present.
    #[inline(always)]
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.delete(key)
    }

    /// Removes `key`, returning its value.
    #[inline(always)]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.remove(key)
    }
}

impl<K: Ord, V: Clone + Default> OrderedMap<K, V> {
    /// Owned lookup that falls back to `V::default()`.
    #[inline(always)]
    pub fn get_cloned_or_default<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).cloned().unwrap_or_default()
    }
}

impl<K: Serialize, V: Serialize> OrderedMap<K, V> {
    /// Encodes the map as a JSON object, fields in ascending key order.
    ///
    /// Nothing is returned on failure, a partially written document is
    /// dropped.
    pub fn encode(&self) -> Result<String> {
        self.try_encode_value().map_err(|e| {
            debug!(error = %e, "failed to encode an ordered map");
            SortedError::encode(e)
        })
    }
}

impl<K: Ord + DeserializeOwned, V: DeserializeOwned> OrderedMap<K, V> {
    /// Decodes a JSON object produced by [`encode`](Self::encode).
    ///
    /// The input field order does not matter; a repeated field keeps its
    /// last value.
    pub fn decode(text: &str) -> Result<Self> {
        <Self as ValueDe>::decode_value(text).map_err(|e| {
            debug!(error = %e, "failed to decode an ordered map");
            SortedError::decode(e)
        })
    }
}

impl<K: Serialize, V: Serialize> Serialize for OrderedMap<K, V> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            let name = k
                .try_encode_key()
                .map_err(|e| <S::Error as ser::Error>::custom(e.get_lowest_msg()))?;
            map.serialize_entry(&name, v)?;
        }
        map.end()
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedMap<K, V>
where
    K: Ord + DeserializeOwned,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor {
            _p: PhantomData,
        })
    }
}

struct OrderedMapVisitor<K, V> {
    _p: PhantomData<(K, V)>,
}

impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
where
    K: Ord + DeserializeOwned,
    V: Deserialize<'de>,
{
    type Value = OrderedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object whose field names are encoded keys")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0).min(4096));
        while let Some((name, value)) = access.next_entry::<String, V>()? {
            let key = K::decode_key(&name)
                .map_err(|e| <A::Error as de::Error>::custom(e.get_top_msg()))?;
            pairs.push((key, value));
        }
        Ok(OrderedMap::from_pairs(pairs))
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        iter.into_iter().for_each(|(k, v)| {
            self.put(k, v);
        });
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Ascending iterator over the entries of an [`OrderedMap`].
#[derive(Clone, Debug)]
pub struct OrderedMapIter<'a, K, V> {
    inner: sorted_kv::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for OrderedMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for OrderedMapIter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for OrderedMapIter<'_, K, V> {}
impl<K, V> FusedIterator for OrderedMapIter<'_, K, V> {}

/// Ascending iterator over the entries of an [`OrderedMap`], values mutable.
#[derive(Debug)]
pub struct OrderedMapIterMut<'a, K, V> {
    inner: sorted_kv::IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for OrderedMapIterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for OrderedMapIterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for OrderedMapIterMut<'_, K, V> {}
impl<K, V> FusedIterator for OrderedMapIterMut<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = OrderedMapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut OrderedMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = OrderedMapIterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = sorted_kv::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
