//!
//! # Common components
//!
//! The ordered search primitive and the normalization helpers shared by
//! every sorted container in this workspace.
//!


use std::{borrow::Borrow, cmp::Ordering};

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Position of a target inside an ordered slice.
///
/// `found == true`: `idx` points at the matching element.
/// `found == false`: `idx` is where the target would have to be inserted
/// to keep the slice ordered.
pub type Found = (usize, bool);

/// Binary search over an ordered slice with insertion-point semantics.
///
/// Runs in `O(log N)` comparisons. If equal elements were present,
/// the first of them would be reported (lower bound).
#[inline(always)]
pub fn search<T, Q>(slice: &[T], target: &Q) -> Found
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    search_by(slice, |x| x.borrow().cmp(target))
}

/// Same as [`search`], with a caller-provided comparator.
///
/// `f` must return the ordering of the visited element relative to the
/// target, and must be consistent with the order of `slice`.
pub fn search_by<T, F>(slice: &[T], mut f: F) -> Found
where
    F: FnMut(&T) -> Ordering,
{
    let idx = slice.partition_point(|x| Ordering::Less == f(x));
    let found = slice
        .get(idx)
        .map(|x| Ordering::Equal == f(x))
        .unwrap_or(false);
    (idx, found)
}

/// Sort, then collapse adjacent equal elements.
///
/// The sort is stable, so among equal elements the one that came first
/// in the input survives.
pub fn normalize<T: Ord>(mut v: Vec<T>) -> Vec<T> {
    v.sort();
    v.dedup();
    v
}

/// Sort pairs by key and split them into two parallel buffers.
///
/// For repeated keys the last value in input order wins, which is the
/// same outcome as inserting the pairs one by one.
pub fn normalize_pairs<K: Ord, V>(mut pairs: Vec<(K, V)>) -> (Vec<K>, Vec<V>) {
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut keys: Vec<K> = Vec::with_capacity(pairs.len());
    let mut values: Vec<V> = Vec::with_capacity(pairs.len());

    for (k, v) in pairs {
        if keys.last() == Some(&k) {
            if let Some(last) = values.last_mut() {
                *last = v;
            }
        } else {
            keys.push(k);
            values.push(v);
        }
    }

    (keys, values)
}

/// Checks the strict-ascending invariant of a buffer.
#[inline(always)]
pub fn is_strictly_ascending<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|w| w[0] < w[1])
}
