//! Order-independent map hashing.
//!
//! Each entry hashes as `fuse(key_hash, value_hash)`. The map's data hash
//! folds the multiset of entry hashes sorted ascending by unsigned
//! big-endian byte order, so the result is a function of the entries and
//! nothing else — insertion order and trie shape are invisible, and no
//! ordering of keys at the value level is required.

use dacite_hash::{fuse, Hash, Result};

use crate::seq;
use crate::value::Value;

/// Hash of a single entry: `fuse(key.value_hash, value.value_hash)`.
pub(crate) fn entry_hash(key: &Value, value: &Value) -> Result<Hash> {
    fuse(key.hash(), value.hash())
}

/// Data hash of a map given its surviving entries, in any order.
///
/// Empty map: `SHA-256(empty)`, by the same convention as sequences.
pub(crate) fn entries_data_hash<'a>(
    entries: impl Iterator<Item = (&'a Value, &'a Value)>,
) -> Result<Hash> {
    let mut hashes = entries
        .map(|(k, v)| entry_hash(k, v))
        .collect::<Result<Vec<_>>>()?;
    hashes.sort_unstable();
    seq::fold(hashes.into_iter().map(Ok))
}
