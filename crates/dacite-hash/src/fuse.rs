//! The fuse mixer — associative, non-commutative combination of two
//! 256-bit hashes.
//!
//! All arithmetic is 64-bit unsigned wrapping. For inputs
//! `a = (a0,a1,a2,a3)` and `b = (b0,b1,b2,b3)`:
//!
//! ```text
//! c0 = a0 + a3·b2 + b0
//! c1 = a1 + b1
//! c2 = a2 + b2
//! c3 = a3 + b3
//! ```
//!
//! The single non-linear term `a3·b2` writes into `c0` only. That word
//! dependence graph is a DAG, which makes `fuse(fuse(a,b),c)` and
//! `fuse(a,fuse(b,c))` equal term-by-term — associativity holds exactly
//! under wrapping arithmetic, not just probabilistically. It also puts
//! maximum mixing in the most-significant word w0, the word trie
//! indexing consumes first. Any edit to these four lines must preserve
//! both properties.

use crate::hash::Hash;
use crate::{HashError, Result};

/// Combine two hashes without the low-entropy check.
///
/// For internal reductions whose result is validated at the boundary.
/// Six wrapping additions and one wrapping multiplication.
pub fn fuse_unchecked(a: Hash, b: Hash) -> Hash {
    let [a0, a1, a2, a3] = a.to_words();
    let [b0, b1, b2, b3] = b.to_words();
    Hash::from_words([
        a0.wrapping_add(a3.wrapping_mul(b2)).wrapping_add(b0),
        a1.wrapping_add(b1),
        a2.wrapping_add(b2),
        a3.wrapping_add(b3),
    ])
}

/// Combine two hashes, rejecting low-entropy output.
///
/// # Errors
///
/// Returns [`HashError::LowEntropy`] when the output has zero in the low
/// 32 bits of all four words. Callers either surface the error or inject
/// entropy (for instance via [`index_salt`]) and retry at their level.
pub fn fuse(a: Hash, b: Hash) -> Result<Hash> {
    let out = fuse_unchecked(a, b);
    if out.is_low_entropy() {
        return Err(HashError::LowEntropy);
    }
    Ok(out)
}

/// A distinguishing salt derived from a position index.
///
/// Canonical entropy source for the retry arm of the low-entropy
/// recovery policy: fuse the salt into the offending input and recompute.
pub fn index_salt(index: u64) -> Hash {
    Hash::digest_many(&[b"dacite.core/fuse-salt", &index.to_be_bytes()])
}
