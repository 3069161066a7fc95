//! Trie operations — path-copying insert, lookup, and remove.
//!
//! Every mutation builds fresh nodes along the root-to-leaf path and
//! shares the rest of the structure through `Arc`. Entries are
//! identified by the key's 256-bit value hash; two keys with equal
//! hashes are the same key.

use std::sync::Arc;

use dacite_hash::Hash;
use tracing::warn;

use super::node::{compact_index, fragment, mask, MapEntry, Node, MAX_DEPTH};
use crate::value::Value;

/// Result of a recursive insert.
pub(crate) struct InsertOutcome {
    /// Root of the rebuilt subtree.
    pub node: Arc<Node>,
    /// The displaced value when the key already existed.
    pub replaced: Option<Value>,
}

/// Result of a recursive remove.
pub(crate) enum RemoveOutcome {
    /// Key not present; the subtree is untouched.
    NotFound,
    /// Key removed.
    Removed {
        /// Rebuilt subtree, or `None` when it became empty.
        node: Option<Arc<Node>>,
        /// The removed value.
        removed: Value,
    },
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

pub(crate) fn get_recursive<'a>(
    node: &'a Node,
    target: Hash,
    words: &[u64; 4],
    depth: u32,
) -> Option<&'a MapEntry> {
    match node {
        Node::Inner {
            data_map,
            node_map,
            entries,
            children,
        } => {
            let bit = mask(fragment(words, depth));
            if data_map & bit != 0 {
                let entry = &entries[compact_index(*data_map, bit)];
                (entry.key.hash() == target).then_some(entry)
            } else if node_map & bit != 0 {
                let child = &children[compact_index(*node_map, bit)];
                get_recursive(child, target, words, depth + 1)
            } else {
                None
            }
        }
        Node::Collision { entries } => entries.iter().find(|e| e.key.hash() == target),
    }
}

// ---------------------------------------------------------------------------
// Insert
// ---------------------------------------------------------------------------

pub(crate) fn insert_recursive(node: &Node, entry: MapEntry, depth: u32) -> InsertOutcome {
    match node {
        Node::Inner {
            data_map,
            node_map,
            entries,
            children,
        } => insert_into_inner(*data_map, *node_map, entries, children, entry, depth),
        Node::Collision { entries } => insert_into_collision(entries, entry),
    }
}

fn insert_into_inner(
    data_map: u32,
    node_map: u32,
    entries: &[MapEntry],
    children: &[Arc<Node>],
    entry: MapEntry,
    depth: u32,
) -> InsertOutcome {
    let words = entry.key_words();
    let bit = mask(fragment(&words, depth));

    if data_map & bit != 0 {
        let pos = compact_index(data_map, bit);
        let existing = &entries[pos];

        if existing.key.hash() == entry.key.hash() {
            // Same key: replace the value in place.
            let replaced = existing.value.clone();
            let mut new_entries = entries.to_vec();
            new_entries[pos] = entry;
            InsertOutcome {
                node: Arc::new(Node::Inner {
                    data_map,
                    node_map,
                    entries: new_entries,
                    children: children.to_vec(),
                }),
                replaced: Some(replaced),
            }
        } else {
            // Distinct key at the same position: push both one level down.
            let subtree = build_subtree(existing.clone(), entry, depth + 1);

            let new_data_map = data_map & !bit;
            let new_node_map = node_map | bit;
            let mut new_entries = entries.to_vec();
            new_entries.remove(pos);
            let mut new_children = children.to_vec();
            new_children.insert(compact_index(new_node_map, bit), subtree);

            InsertOutcome {
                node: Arc::new(Node::Inner {
                    data_map: new_data_map,
                    node_map: new_node_map,
                    entries: new_entries,
                    children: new_children,
                }),
                replaced: None,
            }
        }
    } else if node_map & bit != 0 {
        // Position holds a subtree: recurse and swap in the rebuilt child.
        let pos = compact_index(node_map, bit);
        let outcome = insert_recursive(&children[pos], entry, depth + 1);
        let mut new_children = children.to_vec();
        new_children[pos] = outcome.node;
        InsertOutcome {
            node: Arc::new(Node::Inner {
                data_map,
                node_map,
                entries: entries.to_vec(),
                children: new_children,
            }),
            replaced: outcome.replaced,
        }
    } else {
        // Empty position: add an inline entry.
        let new_data_map = data_map | bit;
        let mut new_entries = entries.to_vec();
        new_entries.insert(compact_index(new_data_map, bit), entry);
        InsertOutcome {
            node: Arc::new(Node::Inner {
                data_map: new_data_map,
                node_map,
                entries: new_entries,
                children: children.to_vec(),
            }),
            replaced: None,
        }
    }
}

fn insert_into_collision(entries: &[MapEntry], entry: MapEntry) -> InsertOutcome {
    let mut new_entries = entries.to_vec();
    if let Some(pos) = new_entries
        .iter()
        .position(|e| e.key.hash() == entry.key.hash())
    {
        let replaced = new_entries[pos].value.clone();
        new_entries[pos] = entry;
        InsertOutcome {
            node: Arc::new(Node::Collision {
                entries: new_entries,
            }),
            replaced: Some(replaced),
        }
    } else {
        new_entries.push(entry);
        InsertOutcome {
            node: Arc::new(Node::Collision {
                entries: new_entries,
            }),
            replaced: None,
        }
    }
}

/// Builds the subtree for two entries that collide at the current depth,
/// descending until their hash fragments diverge.
fn build_subtree(e1: MapEntry, e2: MapEntry, depth: u32) -> Arc<Node> {
    if depth >= MAX_DEPTH {
        // Every indexable bit of both key hashes agrees. A genuine full
        // 256-bit collision between distinct keys would be a
        // cryptographic anomaly; near-collisions differing only in the
        // skipped low bits land here too.
        warn!(
            key_a = %e1.key.hash().short(),
            key_b = %e2.key.hash().short(),
            "key-hash index bits exhausted; falling back to collision bucket"
        );
        return Arc::new(Node::Collision {
            entries: vec![e1, e2],
        });
    }

    let w1 = e1.key_words();
    let w2 = e2.key_words();
    let f1 = fragment(&w1, depth);
    let f2 = fragment(&w2, depth);

    if f1 == f2 {
        let child = build_subtree(e1, e2, depth + 1);
        Arc::new(Node::Inner {
            data_map: 0,
            node_map: mask(f1),
            entries: Vec::new(),
            children: vec![child],
        })
    } else {
        let entries = if f1 < f2 { vec![e1, e2] } else { vec![e2, e1] };
        Arc::new(Node::Inner {
            data_map: mask(f1) | mask(f2),
            node_map: 0,
            entries,
            children: Vec::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// Remove
// ---------------------------------------------------------------------------

pub(crate) fn remove_recursive(
    node: &Node,
    target: Hash,
    words: &[u64; 4],
    depth: u32,
) -> RemoveOutcome {
    match node {
        Node::Inner {
            data_map,
            node_map,
            entries,
            children,
        } => remove_from_inner(*data_map, *node_map, entries, children, target, words, depth),
        Node::Collision { entries } => remove_from_collision(entries, target),
    }
}

fn remove_from_inner(
    data_map: u32,
    node_map: u32,
    entries: &[MapEntry],
    children: &[Arc<Node>],
    target: Hash,
    words: &[u64; 4],
    depth: u32,
) -> RemoveOutcome {
    let bit = mask(fragment(words, depth));

    if data_map & bit != 0 {
        let pos = compact_index(data_map, bit);
        if entries[pos].key.hash() != target {
            return RemoveOutcome::NotFound;
        }
        let removed = entries[pos].value.clone();
        let new_data_map = data_map & !bit;
        if new_data_map == 0 && node_map == 0 {
            return RemoveOutcome::Removed {
                node: None,
                removed,
            };
        }
        let mut new_entries = entries.to_vec();
        new_entries.remove(pos);
        RemoveOutcome::Removed {
            node: Some(Arc::new(Node::Inner {
                data_map: new_data_map,
                node_map,
                entries: new_entries,
                children: children.to_vec(),
            })),
            removed,
        }
    } else if node_map & bit != 0 {
        let pos = compact_index(node_map, bit);
        match remove_recursive(&children[pos], target, words, depth + 1) {
            RemoveOutcome::NotFound => RemoveOutcome::NotFound,
            RemoveOutcome::Removed {
                node: None,
                removed,
            } => {
                // Child emptied out: clear its position.
                let new_node_map = node_map & !bit;
                if data_map == 0 && new_node_map == 0 {
                    return RemoveOutcome::Removed {
                        node: None,
                        removed,
                    };
                }
                let mut new_children = children.to_vec();
                new_children.remove(pos);
                RemoveOutcome::Removed {
                    node: Some(Arc::new(Node::Inner {
                        data_map,
                        node_map: new_node_map,
                        entries: entries.to_vec(),
                        children: new_children,
                    })),
                    removed,
                }
            }
            RemoveOutcome::Removed {
                node: Some(child),
                removed,
            } => {
                if let Some(entry) = child.single_entry() {
                    // Shrunk to one entry: pull it inline.
                    let entry = entry.clone();
                    let new_node_map = node_map & !bit;
                    let new_data_map = data_map | bit;
                    let mut new_entries = entries.to_vec();
                    new_entries.insert(compact_index(new_data_map, bit), entry);
                    let mut new_children = children.to_vec();
                    new_children.remove(pos);
                    RemoveOutcome::Removed {
                        node: Some(Arc::new(Node::Inner {
                            data_map: new_data_map,
                            node_map: new_node_map,
                            entries: new_entries,
                            children: new_children,
                        })),
                        removed,
                    }
                } else {
                    let mut new_children = children.to_vec();
                    new_children[pos] = child;
                    RemoveOutcome::Removed {
                        node: Some(Arc::new(Node::Inner {
                            data_map,
                            node_map,
                            entries: entries.to_vec(),
                            children: new_children,
                        })),
                        removed,
                    }
                }
            }
        }
    } else {
        RemoveOutcome::NotFound
    }
}

fn remove_from_collision(entries: &[MapEntry], target: Hash) -> RemoveOutcome {
    let Some(pos) = entries.iter().position(|e| e.key.hash() == target) else {
        return RemoveOutcome::NotFound;
    };
    let removed = entries[pos].value.clone();
    if entries.len() == 1 {
        return RemoveOutcome::Removed {
            node: None,
            removed,
        };
    }
    let mut new_entries = entries.to_vec();
    new_entries.remove(pos);
    RemoveOutcome::Removed {
        node: Some(Arc::new(Node::Collision {
            entries: new_entries,
        })),
        removed,
    }
}
