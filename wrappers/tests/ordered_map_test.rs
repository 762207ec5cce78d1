use ruc::*;
use serde::{Deserialize, Serialize};
use sortx::{is_strictly_ascending, OrderedMap, SortedError, ValueDe, ValueEn};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Default, Debug, Eq, PartialEq, Clone)]
struct SampleBlock {
    idx: usize,
    data: Vec<usize>,
}

fn gen_sample(idx: usize) -> SampleBlock {
    SampleBlock {
        idx,
        data: vec![idx],
    }
}

#[test]
fn basic_cases() {
    let cnt = 200;

    let hdr = {
        let mut hdr_i: OrderedMap<usize, SampleBlock> = OrderedMap::new();

        (0..cnt).for_each(|i| {
            assert!(hdr_i.get(&i).is_none());
        });

        (0..cnt).rev().map(|i| (i, gen_sample(i))).for_each(|(i, b)| {
            assert!(hdr_i.put(i, b.clone()));
            assert_eq!(pnk!(hdr_i.get(&i)).idx, i);
            assert!(hdr_i.delete(&i));
            assert!(hdr_i.get(&i).is_none());
            assert!(hdr_i.put(i, b.clone()));
            assert!(!hdr_i.put(i, b));
        });

        pnk!(<OrderedMap<usize, SampleBlock> as ValueEn>::try_encode_value(&hdr_i))
    };

    let mut reloaded = pnk!(<OrderedMap<usize, SampleBlock> as ValueDe>::decode_value(&hdr));

    (0..cnt).for_each(|i| {
        assert_eq!(i, reloaded.get(&i).unwrap().idx);
    });

    (1..cnt).for_each(|i| {
        pnk!(reloaded.get_mut(&i)).idx = 1 + i;
        assert_eq!(pnk!(reloaded.get(&i)).idx, 1 + i);
        assert!(reloaded.contains(&i));
        assert!(reloaded.delete(&i));
        assert!(!reloaded.contains(&i));
    });

    assert_eq!(1, reloaded.len());
    reloaded.clear();
    assert!(reloaded.is_empty());
}

#[test]
fn random_ops_keep_invariants() {
    let mut hdr: OrderedMap<u16, u64> = OrderedMap::new();
    let mut model = BTreeMap::new();

    for _ in 0..5000 {
        let key = rand::random::<u16>() % 512;
        let value = rand::random::<u64>();

        match rand::random::<u8>() % 4 {
            0 => {
                let len = hdr.len();
                let snapshot = hdr.clone();
                let existed = model.remove(&key).is_some();
                assert_eq!(existed, hdr.delete(&key));
                if existed {
                    assert!(!hdr.contains(&key));
                    assert_eq!(len - 1, hdr.len());
                } else {
                    assert_eq!(snapshot, hdr);
                }
            }
            _ => {
                let len = hdr.len();
                let is_new = model.insert(key, value).is_none();
                assert_eq!(is_new, hdr.put(key, value));
                assert_eq!(Some(&value), hdr.get(&key));
                assert_eq!(if is_new { len + 1 } else { len }, hdr.len());
            }
        }

        assert!(is_strictly_ascending(hdr.keys()));
        assert_eq!(hdr.keys().len(), hdr.values().len());
    }

    assert!(model.iter().eq(hdr.iter()));
    assert!(model.keys().eq(hdr.keys().iter()));
    assert!(model.values().eq(hdr.values().iter()));
}

#[test]
fn encode_is_independent_of_insertion_order() {
    let pairs = (0..64u32).map(|i| (i * 37 % 64, i)).collect::<Vec<_>>();

    let mut a = OrderedMap::new();
    pairs.iter().for_each(|(k, v)| {
        a.put(*k, *v);
    });

    let mut b = OrderedMap::new();
    pairs.iter().rev().for_each(|(k, v)| {
        b.put(*k, *v);
    });

    let model = pairs.into_iter().collect::<BTreeMap<_, _>>();

    assert_eq!(pnk!(a.encode()), pnk!(b.encode()));
    assert_eq!(pnk!(serde_json::to_string(&model)), pnk!(a.encode()));
}

#[test]
fn encode_nested_values() {
    let mut hdr = OrderedMap::new();
    hdr.put("b".to_owned(), gen_sample(2));
    hdr.put("a".to_owned(), gen_sample(1));

    assert_eq!(
        r#"{"a":{"idx":1,"data":[1]},"b":{"idx":2,"data":[2]}}"#,
        pnk!(hdr.encode())
    );
}

#[test]
fn decode_failures_are_distinct() {
    let e = OrderedMap::<u32, SampleBlock>::decode(r#"{"1":{"idx":"x"}}"#).unwrap_err();
    assert!(matches!(e, SortedError::Decode(_)));
    assert!(e.to_string().starts_with("Decoding error"));
}
