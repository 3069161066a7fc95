//! Persistent hash-array-mapped trie keyed by value hash.
//!
//! The trie backing map values: 32-way branching, 5 bits of the key's
//! value hash per level, read MSB-first from the best-mixed word first
//! (see [`node`] for the index discipline). Keys are identified by
//! their 256-bit value hash, so no ordering or hashing of keys at the
//! value level is required.
//!
//! Structure is shared through `Arc`: cloning a map is O(1), and every
//! mutation path-copies the spine while sharing the rest. Trie shape is
//! a representation detail — the map's identity hash is a function of
//! the entry multiset alone.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

pub(crate) mod node;
mod ops;

mod iter;

pub use iter::Iter;

use node::{fragment, mask, MapEntry, Node};
use ops::{get_recursive, insert_recursive, remove_recursive, RemoveOutcome};

/// Persistent map from key values to values, keyed by the key's value
/// hash.
///
/// Duplicate-key insertion replaces the surviving entry, so a map built
/// from any entry sequence holds at most one entry per key.
#[derive(Clone, Default)]
pub struct HamtMap {
    root: Option<Arc<Node>>,
    size: usize,
}

impl HamtMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the value associated with `key`, compared by value hash.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        let root = self.root.as_deref()?;
        let target = key.hash();
        let words = target.to_words();
        get_recursive(root, target, &words, 0).map(|entry| &entry.value)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    /// Inserts a key-value pair.
    ///
    /// Returns the displaced value when the key was already present.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        let entry = MapEntry { key, value };
        if let Some(root) = self.root.as_deref() {
            let outcome = insert_recursive(root, entry, 0);
            self.root = Some(outcome.node);
            if outcome.replaced.is_none() {
                self.size += 1;
            }
            outcome.replaced
        } else {
            let words = entry.key_words();
            let bit = mask(fragment(&words, 0));
            self.root = Some(Arc::new(Node::Inner {
                data_map: bit,
                node_map: 0,
                entries: vec![entry],
                children: Vec::new(),
            }));
            self.size = 1;
            None
        }
    }

    /// Removes a key. Returns the removed value, or `None` if the key
    /// was not present.
    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        let root = self.root.as_deref()?;
        let target = key.hash();
        let words = target.to_words();
        match remove_recursive(root, target, &words, 0) {
            RemoveOutcome::NotFound => None,
            RemoveOutcome::Removed { node, removed } => {
                self.root = node;
                self.size -= 1;
                Some(removed)
            }
        }
    }

    /// Returns an iterator over `(&key, &value)` pairs.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.size)
    }
}

impl fmt::Debug for HamtMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HamtMap")
            .field("len", &self.size)
            .finish_non_exhaustive()
    }
}

impl Extend<(Value, Value)> for HamtMap {
    fn extend<I: IntoIterator<Item = (Value, Value)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl FromIterator<(Value, Value)> for HamtMap {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a> IntoIterator for &'a HamtMap {
    type Item = (&'a Value, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
