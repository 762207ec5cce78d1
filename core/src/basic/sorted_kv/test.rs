use super::*;
use crate::common::is_strictly_ascending;

#[test]
fn test_put() {
    let mut hdr: SortedKv<u64, u64> = SortedKv::new();
    let max = 100;
    (0..max)
        .rev()
        .map(|i: u64| (i, max + i))
        .for_each(|(key, value)| {
            assert!(hdr.get(&key).is_none());
            assert!(hdr.put(key, value));
            assert!(hdr.contains_key(&key));
            assert_eq!(Some(&value), hdr.get(&key));

            // overwrite keeps the length
            let len = hdr.len();
            assert!(!hdr.put(key, value + 1));
            assert_eq!(len, hdr.len());
            assert_eq!(Some(&(value + 1)), hdr.get(&key));
        });

    assert!(is_strictly_ascending(hdr.keys()));
    assert_eq!(hdr.keys().len(), hdr.values().len());
    hdr.iter().for_each(|(k, v)| assert_eq!(max + k + 1, *v));
}

#[test]
fn test_remove() {
    let mut hdr = SortedKv::from_pairs((0..10u32).map(|i| (i, i * 10)).collect());

    assert_eq!(Some(30), hdr.remove(&3));
    assert_eq!(None, hdr.remove(&3));
    assert!(!hdr.delete(&3));
    assert!(hdr.delete(&4));
    assert!(!hdr.contains_key(&4));

    assert_eq!(&[0, 1, 2, 5, 6, 7, 8, 9], hdr.keys());
    assert_eq!(&[0, 10, 20, 50, 60, 70, 80, 90], hdr.values());

    let snapshot = hdr.clone();
    assert!(!hdr.delete(&100));
    assert_eq!(snapshot, hdr);
}

#[test]
fn test_iter_mut() {
    let mut hdr = SortedKv::from_pairs(vec![(3, 0), (1, 0), (2, 0)]);
    for (k, v) in hdr.iter_mut() {
        *v = *k * 2;
    }
    assert_eq!(&[2, 4, 6], hdr.values());

    // a second pass starts from the smallest key again
    let seen = hdr.iter_mut().map(|(k, _)| *k).collect::<Vec<_>>();
    assert_eq!(vec![1, 2, 3], seen);
}

#[test]
fn test_get_mut() {
    let mut hdr = SortedKv::new();
    hdr.put("a".to_owned(), vec![1]);
    if let Some(v) = hdr.get_mut("a") {
        v.push(2);
    }
    assert_eq!(Some(&vec![1, 2]), hdr.get("a"));
    assert!(hdr.get_mut("b").is_none());
}

#[test]
fn test_first_last() {
    let mut hdr: SortedKv<u8, u8> = SortedKv::new();
    assert!(hdr.first().is_none());
    assert!(hdr.last().is_none());

    hdr.put(5, 50);
    hdr.put(1, 10);
    hdr.put(9, 90);
    assert_eq!(Some((&1, &10)), hdr.first());
    assert_eq!(Some((&9, &90)), hdr.last());
}

#[test]
fn test_into_iter() {
    let hdr = SortedKv::from_pairs(vec![("b", 2), ("a", 1)]);
    assert_eq!(vec![("a", 1), ("b", 2)], hdr.into_iter().collect::<Vec<_>>());
}

#[test]
fn test_clear() {
    let mut hdr = SortedKv::from_pairs(vec![(1, 1), (2, 2)]);
    hdr.clear();
    assert!(hdr.is_empty());
    let (keys, values) = hdr.into_parts();
    assert!(keys.is_empty() && values.is_empty());
}

#[test]
fn test_random_ops_against_btreemap() {
    use std::collections::BTreeMap;

    let mut hdr: SortedKv<u8, u32> = SortedKv::new();
    let mut model = BTreeMap::new();

    for _ in 0..2000 {
        let key = rand::random::<u8>() % 64;
        let value = rand::random::<u32>();
        if rand::random::<bool>() {
            assert_eq!(model.insert(key, value).is_none(), hdr.put(key, value));
        } else {
            assert_eq!(model.remove(&key), hdr.remove(&key));
        }
        assert!(is_strictly_ascending(hdr.keys()));
    }

    assert_eq!(model.len(), hdr.len());
    assert!(model.iter().eq(hdr.iter()));
}
