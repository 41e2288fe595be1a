#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can check the
// bucket structure directly, not only the public answers.

use crate::config::TableConfig;
use crate::hash_table::HashTable;
use crate::test_utils::IdentityBuildHasher;
use hashbrown::HashMap;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Put(u64, i32),
    Get(u64),
    Remove(u64),
    ContainsKey(u64),
    ContainsValue(i32),
    Resize(usize),
    Clear,
}

// Small key and value ranges so that overwrites, misses and collisions are
// common; identity hashing makes `key % capacity` the bucket.
fn arb_op() -> impl Strategy<Value = Op> {
    let key = 0u64..24;
    let val = -4i32..4;
    prop_oneof![
        6 => (key.clone(), val.clone()).prop_map(|(k, v)| Op::Put(k, v)),
        2 => key.clone().prop_map(Op::Get),
        3 => key.clone().prop_map(Op::Remove),
        2 => key.prop_map(Op::ContainsKey),
        1 => val.prop_map(Op::ContainsValue),
        1 => (1usize..20).prop_map(Op::Resize),
        1 => Just(Op::Clear),
    ]
}

fn assert_structure(sut: &HashTable<u64, i32, IdentityBuildHasher>) {
    sut.buckets().assert_linked();
    for slot in 0..sut.capacity() {
        let keys: Vec<u64> = sut.buckets().chain(slot).map(|(k, _)| *k).collect();
        let mut dedup = keys.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), keys.len(), "duplicate key in chain {slot}");
    }
}

// Property: state-machine equivalence against hashbrown::HashMap.
// Invariants exercised across random operation sequences:
// - put returns the previous value; len only moves on fresh inserts.
// - get/contains_key parity with the model; contains_value scans all chains.
// - remove returns the stored value once and then reports absence.
// - Capacity never shrinks except through an explicit resize.
// - After every step: len == reachable nodes, each node sits in the slot
//   its hash maps to, and keys are distinct within each chain.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(
        initial in 1usize..10,
        ops in proptest::collection::vec(arb_op(), 1..80),
    ) {
        let config = TableConfig::default().initial_capacity(initial);
        let mut sut: HashTable<u64, i32, IdentityBuildHasher> =
            HashTable::with_config_and_hasher(config, IdentityBuildHasher).unwrap();
        let mut model: HashMap<u64, i32> = HashMap::new();

        for op in ops {
            let cap_before = sut.capacity();
            match op {
                Op::Put(k, v) => {
                    prop_assert_eq!(sut.put(k, v), model.insert(k, v));
                    prop_assert!(sut.capacity() >= cap_before);
                }
                Op::Get(k) => {
                    prop_assert_eq!(sut.get(&k), model.get(&k));
                    // Repeat lookups agree with themselves.
                    prop_assert_eq!(sut.get(&k), model.get(&k));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(sut.remove(&k), model.remove(&k));
                    prop_assert_eq!(sut.get(&k), None);
                    prop_assert_eq!(sut.capacity(), cap_before);
                }
                Op::ContainsKey(k) => {
                    prop_assert_eq!(sut.contains_key(&k), model.contains_key(&k));
                    prop_assert_eq!(sut.contains_key(&k), sut.get(&k).is_some());
                }
                Op::ContainsValue(v) => {
                    let expected = model.values().any(|x| *x == v);
                    prop_assert_eq!(sut.contains_value(&v), expected);
                }
                Op::Resize(c) => {
                    sut.resize(c).unwrap();
                    prop_assert_eq!(sut.capacity(), c);
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                    prop_assert_eq!(sut.capacity(), cap_before);
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            assert_structure(&sut);
        }

        let mut seen: Vec<(u64, i32)> = sut.iter().map(|(k, v)| (*k, *v)).collect();
        let mut expected: Vec<(u64, i32)> = model.into_iter().collect();
        seen.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }
}

// Property: growth happens exactly when the pre-insert load exceeds the
// configured factor, and always doubles.
proptest! {
    #[test]
    fn prop_growth_matches_policy(
        initial in 1usize..6,
        lf_quarters in 1u32..12,
        keys in proptest::collection::vec(any::<u64>(), 1..60),
    ) {
        let load_factor = lf_quarters as f64 / 4.0;
        let config = TableConfig::default()
            .initial_capacity(initial)
            .load_factor(load_factor);
        let mut sut: HashTable<u64, u64> = HashTable::with_config(config).unwrap();
        for k in keys {
            let (len, cap) = (sut.len(), sut.capacity());
            let expect_growth = len as f64 / cap as f64 > load_factor;
            sut.put(k, k);
            if expect_growth {
                prop_assert_eq!(sut.capacity(), cap * 2);
            } else {
                prop_assert_eq!(sut.capacity(), cap);
            }
            prop_assert_eq!(sut.get(&k), Some(&k));
        }
        sut.buckets().assert_linked();
    }
}
