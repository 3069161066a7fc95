//! Property-based tests for the value model.
//!
//! These verify the identity invariants for arbitrary inputs:
//!
//! - Built-in type hashes never alias
//! - Equal payloads under distinct types hash apart
//! - Map identity is order-independent; sequence identity is not
//! - The trie agrees with a reference model under arbitrary operation
//!   sequences

use std::collections::HashMap;

use proptest::prelude::*;

use crate::hamt::HamtMap;
use crate::leaf::Leaf;
use crate::types::{type_hash, TypeTag};
use crate::value::Value;
use dacite_hash::Hash;

fn arb_leaf() -> impl Strategy<Value = Leaf> {
    let signed = prop_oneof![
        any::<i8>().prop_map(Leaf::I8),
        any::<i16>().prop_map(Leaf::I16),
        any::<i32>().prop_map(Leaf::I32),
        any::<i64>().prop_map(Leaf::I64),
        any::<i128>().prop_map(Leaf::I128),
        any::<[u8; 32]>().prop_map(Leaf::I256),
    ];
    let unsigned = prop_oneof![
        any::<u8>().prop_map(Leaf::U8),
        any::<u16>().prop_map(Leaf::U16),
        any::<u32>().prop_map(Leaf::U32),
        any::<u64>().prop_map(Leaf::U64),
        any::<u128>().prop_map(Leaf::U128),
        any::<[u8; 32]>().prop_map(Leaf::U256),
    ];
    let other = prop_oneof![
        Just(Leaf::Null),
        any::<bool>().prop_map(Leaf::Bool),
        any::<f32>().prop_map(Leaf::F32),
        any::<f64>().prop_map(Leaf::F64),
        any::<char>().prop_map(Leaf::Char),
    ];
    prop_oneof![signed, unsigned, other]
}

proptest! {
    #[test]
    fn leaf_hash_deterministic(leaf in arb_leaf()) {
        prop_assert_eq!(leaf.value_hash().unwrap(), leaf.value_hash().unwrap());
    }

    #[test]
    fn leaf_equality_implies_hash_equality(leaf in arb_leaf()) {
        let copy = leaf;
        prop_assert_eq!(leaf, copy);
        prop_assert_eq!(leaf.value_hash().unwrap(), copy.value_hash().unwrap());
    }

    /// The same 64-bit payload under distinct widths or signedness
    /// diverges with overwhelming probability.
    #[test]
    fn equal_payload_distinct_types_diverge(v in any::<u32>()) {
        let as_u32 = Value::u32(v).unwrap().hash();
        let as_u64 = Value::u64(u64::from(v)).unwrap().hash();
        let as_i64 = Value::i64(i64::from(v)).unwrap().hash();
        prop_assert_ne!(as_u32, as_u64);
        prop_assert_ne!(as_u64, as_i64);
    }

    #[test]
    fn extension_names_hash_like_builtins(name in "[a-z]{1,12}\\.test/[a-z]{1,12}") {
        prop_assert_eq!(type_hash(&name), Hash::digest(name.as_bytes()));
        for tag in TypeTag::ALL {
            prop_assert_ne!(type_hash(&name), tag.hash());
        }
    }

    /// Map identity is a function of the entry multiset: any permutation
    /// of the construction sequence produces the same hash.
    #[test]
    fn map_hash_order_independent(
        entries in prop::collection::vec((any::<i64>(), any::<i64>()), 0..16),
        seed in any::<u64>(),
    ) {
        let built = |order: &[(i64, i64)]| {
            Value::map(order.iter().map(|&(k, v)| {
                (Value::i64(k).unwrap(), Value::i64(v).unwrap())
            }))
            .unwrap()
        };
        // Deduplicate keys first so replacement order cannot matter.
        let mut dedup: Vec<(i64, i64)> = Vec::new();
        for &(k, v) in &entries {
            if !dedup.iter().any(|&(k2, _)| k2 == k) {
                dedup.push((k, v));
            }
        }
        let forward = built(&dedup);

        let mut shuffled = dedup.clone();
        // Cheap deterministic shuffle driven by the seed.
        let len = shuffled.len();
        if len > 1 {
            for i in 0..len {
                let j = (seed as usize).wrapping_mul(31).wrapping_add(i * 7) % len;
                shuffled.swap(i, j);
            }
        }
        let permuted = built(&shuffled);
        prop_assert_eq!(forward.hash(), permuted.hash());
    }

    /// Sequence identity depends on order: reversing a vector of
    /// distinct elements changes the hash.
    #[test]
    fn vector_hash_order_dependent(
        mut elems in prop::collection::vec(any::<i64>(), 2..16)
    ) {
        elems.sort_unstable();
        elems.dedup();
        prop_assume!(elems.len() >= 2);

        let values: Vec<Value> =
            elems.iter().map(|&v| Value::i64(v).unwrap()).collect();
        let mut reversed = values.clone();
        reversed.reverse();

        let forward = Value::vector(values).unwrap();
        let backward = Value::vector(reversed).unwrap();
        prop_assert_ne!(forward.hash(), backward.hash());
    }

    #[test]
    fn string_hash_tracks_content(a in ".{0,24}", b in ".{0,24}") {
        let ha = Value::string(a.clone()).unwrap().hash();
        let hb = Value::string(b.clone()).unwrap().hash();
        if a == b {
            prop_assert_eq!(ha, hb);
        } else {
            prop_assert_ne!(ha, hb);
        }
    }

    #[test]
    fn blob_hash_tracks_content(a in prop::collection::vec(any::<u8>(), 0..48)) {
        let v1 = Value::blob(a.clone()).unwrap();
        let v2 = Value::blob(a).unwrap();
        prop_assert_eq!(v1.hash(), v2.hash());
    }

    /// The trie stays consistent with a reference model under arbitrary
    /// insert/remove sequences, and its entry set determines its length.
    #[test]
    fn hamt_matches_reference_model(
        ops in prop::collection::vec((any::<bool>(), 0i64..64), 1..128)
    ) {
        let mut trie = HamtMap::new();
        let mut model: HashMap<i64, i64> = HashMap::new();

        for (i, &(is_insert, k)) in ops.iter().enumerate() {
            let key = Value::i64(k).unwrap();
            if is_insert {
                let val = i as i64;
                let expected = model.insert(k, val);
                let got = trie.insert(key, Value::i64(val).unwrap());
                prop_assert_eq!(
                    expected.map(|v| Value::i64(v).unwrap()),
                    got
                );
            } else {
                let expected = model.remove(&k);
                let got = trie.remove(&key);
                prop_assert_eq!(
                    expected.map(|v| Value::i64(v).unwrap()),
                    got
                );
            }
            prop_assert_eq!(trie.len(), model.len());
        }

        for (k, v) in &model {
            let key = Value::i64(*k).unwrap();
            prop_assert_eq!(trie.get(&key), Some(&Value::i64(*v).unwrap()));
        }
        prop_assert_eq!(trie.iter().count(), model.len());
    }

    /// Two tries with the same surviving entries produce map values with
    /// the same identity, regardless of how they got there.
    #[test]
    fn map_identity_ignores_history(
        entries in prop::collection::vec((0i64..32, any::<i64>()), 0..24)
    ) {
        // Path A: plain construction.
        let a = Value::map(entries.iter().map(|&(k, v)| {
            (Value::i64(k).unwrap(), Value::i64(v).unwrap())
        }))
        .unwrap();

        // Path B: insert everything twice, then rebuild the survivors.
        let mut trie = HamtMap::new();
        for &(k, v) in entries.iter().chain(entries.iter()) {
            trie.insert(Value::i64(k).unwrap(), Value::i64(v).unwrap());
        }
        let b = Value::from_hamt(trie).unwrap();

        prop_assert_eq!(a.hash(), b.hash());
    }
}
