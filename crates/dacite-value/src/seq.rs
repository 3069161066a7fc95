//! Order-preserving sequence hashing.
//!
//! The data hash of a sequence is the left fold of its children's value
//! hashes under `fuse`. Associativity of `fuse` means the representation
//! of the sequence (tree shape, chunk boundaries) cannot affect the
//! result — only element identity and order do. The canonical fold is
//! left-to-right to fix semantics; implementations are free to reduce in
//! parallel trees.

use dacite_hash::{fuse, Hash, Result};

use crate::leaf::Leaf;

/// Left fold of child hashes: `fuse(… fuse(fuse(h0, h1), h2) …, hn)`.
///
/// The empty sequence falls back to the leaf convention,
/// `SHA-256(empty)`, so an empty vector still has a well-defined data
/// hash (distinguished from an empty string by the type hash).
///
/// # Errors
///
/// A `LowEntropy` at any step of the fold propagates; degenerate inputs
/// are made visible rather than absorbed.
pub(crate) fn fold(hashes: impl IntoIterator<Item = Result<Hash>>) -> Result<Hash> {
    let mut iter = hashes.into_iter();
    let Some(first) = iter.next() else {
        return Ok(Hash::digest(&[]));
    };
    let mut acc = first?;
    for h in iter {
        acc = fuse(acc, h?)?;
    }
    Ok(acc)
}

/// Data hash of a string: its children are `char` leaves in code-point
/// order, and each child's full value hash enters the fold.
pub(crate) fn string_data_hash(s: &str) -> Result<Hash> {
    fold(s.chars().map(|c| Leaf::Char(c).value_hash()))
}

/// Data hash of a blob: its children are `u8` leaves in byte order.
pub(crate) fn blob_data_hash(bytes: &[u8]) -> Result<Hash> {
    fold(bytes.iter().map(|&b| Leaf::U8(b).value_hash()))
}
