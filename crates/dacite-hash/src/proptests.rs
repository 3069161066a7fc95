//! Property-based tests for the hash primitives.
//!
//! These verify the algebraic contract of the engine for arbitrary
//! inputs:
//!
//! - Word codec round-trips byte-for-byte
//! - Digest and fuse are deterministic
//! - Fuse is exactly associative under wrapping arithmetic
//! - Fuse is non-commutative and non-identity on random inputs
//! - Checked fuse never lets a low-entropy value escape

use proptest::prelude::*;

use crate::{fuse, fuse_unchecked, Hash, HashError};

fn arb_hash() -> impl Strategy<Value = Hash> {
    any::<[u8; 32]>().prop_map(|bytes| Hash::from_bytes(&bytes).expect("32 bytes"))
}

proptest! {
    #[test]
    fn words_roundtrip(bytes: [u8; 32]) {
        let h = Hash::from_bytes(&bytes).unwrap();
        prop_assert_eq!(Hash::from_words(h.to_words()), h);
        prop_assert_eq!(h.to_bytes(), bytes);
    }

    #[test]
    fn digest_deterministic(data: Vec<u8>) {
        prop_assert_eq!(Hash::digest(&data), Hash::digest(&data));
    }

    #[test]
    fn fuse_deterministic(a in arb_hash(), b in arb_hash()) {
        prop_assert_eq!(fuse_unchecked(a, b), fuse_unchecked(a, b));
    }

    /// Exact associativity, checked over the full 2^512 input space the
    /// strategy can reach. This is algebraic, not probabilistic: any
    /// counterexample is a bug in the word-dependence DAG.
    #[test]
    fn fuse_associative(a in arb_hash(), b in arb_hash(), c in arb_hash()) {
        let left = fuse_unchecked(fuse_unchecked(a, b), c);
        let right = fuse_unchecked(a, fuse_unchecked(b, c));
        prop_assert_eq!(left.to_bytes(), right.to_bytes());
    }

    #[test]
    fn fuse_non_commutative(data_a: Vec<u8>, data_b: Vec<u8>) {
        prop_assume!(data_a != data_b);
        // Probabilistic on well-formed inputs: equality would require the
        // a3·b2 and b3·a2 products to cancel exactly.
        let a = Hash::digest(&data_a);
        let b = Hash::digest(&data_b);
        prop_assert_ne!(fuse_unchecked(a, b), fuse_unchecked(b, a));
    }

    #[test]
    fn fuse_non_identity(data_a: Vec<u8>, data_b: Vec<u8>) {
        let a = Hash::digest(&data_a);
        let b = Hash::digest(&data_b);
        let out = fuse_unchecked(a, b);
        prop_assert_ne!(out, a);
        prop_assert_ne!(out, b);
    }

    #[test]
    fn checked_fuse_output_has_entropy(a in arb_hash(), b in arb_hash()) {
        match fuse(a, b) {
            Ok(out) => {
                prop_assert!(!out.is_low_entropy());
                prop_assert!(out.to_words().iter().any(|w| w & 0xFFFF_FFFF != 0));
            }
            Err(err) => prop_assert_eq!(err, HashError::LowEntropy),
        }
    }

    #[test]
    fn hex_roundtrip(h in arb_hash()) {
        prop_assert_eq!(Hash::from_hex(&h.to_hex()).unwrap(), h);
    }

    #[test]
    fn bytes_roundtrip(h in arb_hash()) {
        prop_assert_eq!(Hash::from_bytes(h.as_bytes()).unwrap(), h);
    }
}
