//! # dacite-value
//!
//! The Dacite value model and its identity rules.
//!
//! Every value — primitive or composite — gets a 256-bit identity
//! derived deterministically from its type and contents:
//! `value_hash = fuse(type_hash, data_hash)`. Identical subtrees share
//! identity across versions, so unequal roots can be diffed and
//! synchronized by fetching only nodes whose hashes differ.
//!
//! This crate provides:
//!
//! - **[`types`]**: the open type registry — canonical names hashed with
//!   SHA-256, built-ins precomputed
//! - **[`Leaf`]**: bounded primitives with fixed canonical byte forms
//! - **[`Value`]**: the tagged value union with memoized identity
//! - **Sequence hashing**: order-preserving folds for strings, blobs,
//!   and vectors
//! - **Map hashing**: order-independent folds over entries sorted by
//!   hash
//! - **[`HamtMap`]**: the persistent 32-way trie backing map values,
//!   indexed from the best-mixed word of the key hash
//!
//! All operations are pure functions; the only failure mode is the
//! low-entropy rejection inherited from `fuse`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod hamt;
pub mod leaf;
pub mod types;
pub mod value;

mod map;
mod seq;

#[cfg(test)]
mod proptests;

pub use dacite_hash::{fuse, fuse_unchecked, index_salt, Hash, HashError};
pub use error::{Result, ValueError};
pub use hamt::HamtMap;
pub use leaf::Leaf;
pub use types::{type_hash, TypeTag};
pub use value::{Kind, Value};
