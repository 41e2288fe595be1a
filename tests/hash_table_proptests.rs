// HashTable property tests over the public API.
//
// Property 1: model equivalence with std HashMap for String keys under the
// default hasher, including explicit resizes.
// Property 2: put/get round trip survives any number of growths.
// Property 3: containsKey(k) iff get(k) is present, for present and absent
// keys alike.
use chained_hashtable::{HashTable, TableConfig};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
enum Op {
    Put(String, u16),
    Remove(String),
    Resize(usize),
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let key = "[a-e]{0,2}";
    let op = prop_oneof![
        5 => (key, any::<u16>()).prop_map(|(k, v)| Op::Put(k, v)),
        2 => key.prop_map(Op::Remove),
        1 => (1usize..32).prop_map(Op::Resize),
    ];
    proptest::collection::vec(op, 1..100)
}

proptest! {
    #[test]
    fn prop_matches_std_hashmap(ops in arb_ops()) {
        let mut sut: HashTable<String, u16> = HashTable::new();
        let mut model: HashMap<String, u16> = HashMap::new();
        for op in ops {
            match op {
                Op::Put(k, v) => {
                    prop_assert_eq!(sut.put(k.clone(), v), model.insert(k, v));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(sut.remove(&k), model.remove(&k));
                }
                Op::Resize(c) => {
                    prop_assert!(sut.resize(c).is_ok());
                }
            }
            prop_assert_eq!(sut.len(), model.len());
        }
        for (k, v) in &model {
            prop_assert_eq!(sut.get(k), Some(v));
            prop_assert!(sut.contains_value(v));
        }
    }

    #[test]
    fn prop_round_trip_across_growth(
        initial in 1usize..5,
        keys in proptest::collection::hash_set(any::<i64>(), 1..200),
    ) {
        let config = TableConfig::default().initial_capacity(initial);
        let mut sut: HashTable<i64, i64> = HashTable::with_config(config).unwrap();
        for &k in &keys {
            prop_assert_eq!(sut.put(k, k ^ 0x55), None);
        }
        prop_assert_eq!(sut.len(), keys.len());
        for &k in &keys {
            prop_assert_eq!(sut.get(&k), Some(&(k ^ 0x55)));
        }
    }

    #[test]
    fn prop_contains_key_iff_get(
        present in proptest::collection::vec(0u32..64, 0..40),
        probes in proptest::collection::vec(0u32..128, 1..40),
    ) {
        let mut sut: HashTable<u32, ()> = HashTable::new();
        for k in present {
            sut.put(k, ());
        }
        for k in probes {
            prop_assert_eq!(sut.contains_key(&k), sut.get(&k).is_some());
        }
    }
}
