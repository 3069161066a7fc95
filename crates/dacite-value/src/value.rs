//! The value model.
//!
//! A [`Value`] is an immutable handle around one of five kinds — leaf,
//! string, blob, vector, map — plus its memoized 256-bit identity. The
//! identity is computed once at construction as
//! `fuse(type_hash, data_hash)` and carried with the value through every
//! structural-sharing operation; it is a function of the logical value,
//! never of time or location.

use std::sync::Arc;

use dacite_hash::{fuse, Hash};

use crate::hamt::HamtMap;
use crate::leaf::Leaf;
use crate::types::TypeTag;
use crate::{map, seq, Result};

/// An immutable value with its content address.
///
/// Cloning shares the underlying representation; the hash rides along.
/// Equality compares memoized hashes, which agrees with structural
/// equality for values built by this engine.
#[derive(Clone, Debug)]
pub struct Value {
    kind: Arc<Kind>,
    hash: Hash,
}

/// The representation of a value.
#[derive(Debug)]
pub enum Kind {
    /// A bounded primitive.
    Leaf(Leaf),
    /// A sequence of code points.
    String(String),
    /// A sequence of bytes.
    Blob(Vec<u8>),
    /// A sequence of arbitrary values.
    Vector(Vec<Value>),
    /// An unordered collection of entries, at most one per key.
    Map(HamtMap),
}

impl Value {
    /// The value's content address.
    pub fn hash(&self) -> Hash {
        self.hash
    }

    /// The value's representation.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// The built-in type of this value.
    pub fn tag(&self) -> TypeTag {
        match self.kind.as_ref() {
            Kind::Leaf(leaf) => leaf.tag(),
            Kind::String(_) => TypeTag::String,
            Kind::Blob(_) => TypeTag::Blob,
            Kind::Vector(_) => TypeTag::Vector,
            Kind::Map(_) => TypeTag::Map,
        }
    }

    // -----------------------------------------------------------------
    // Constructors. Each computes the identity eagerly; `fuse` can
    // reject a degenerate combination, so construction is fallible.
    // -----------------------------------------------------------------

    /// Construct a leaf value.
    pub fn leaf(leaf: Leaf) -> Result<Self> {
        let hash = leaf.value_hash()?;
        Ok(Self {
            kind: Arc::new(Kind::Leaf(leaf)),
            hash,
        })
    }

    /// The null value.
    pub fn null() -> Result<Self> {
        Self::leaf(Leaf::Null)
    }

    /// A boolean value.
    pub fn bool(v: bool) -> Result<Self> {
        Self::leaf(Leaf::Bool(v))
    }

    /// A signed 8-bit integer value.
    pub fn i8(v: i8) -> Result<Self> {
        Self::leaf(Leaf::I8(v))
    }

    /// A signed 16-bit integer value.
    pub fn i16(v: i16) -> Result<Self> {
        Self::leaf(Leaf::I16(v))
    }

    /// A signed 32-bit integer value.
    pub fn i32(v: i32) -> Result<Self> {
        Self::leaf(Leaf::I32(v))
    }

    /// A signed 64-bit integer value.
    pub fn i64(v: i64) -> Result<Self> {
        Self::leaf(Leaf::I64(v))
    }

    /// A signed 128-bit integer value.
    pub fn i128(v: i128) -> Result<Self> {
        Self::leaf(Leaf::I128(v))
    }

    /// A signed 256-bit integer value from big-endian two's-complement
    /// bytes.
    pub fn i256(v: [u8; 32]) -> Result<Self> {
        Self::leaf(Leaf::I256(v))
    }

    /// An unsigned 8-bit integer value.
    pub fn u8(v: u8) -> Result<Self> {
        Self::leaf(Leaf::U8(v))
    }

    /// An unsigned 16-bit integer value.
    pub fn u16(v: u16) -> Result<Self> {
        Self::leaf(Leaf::U16(v))
    }

    /// An unsigned 32-bit integer value.
    pub fn u32(v: u32) -> Result<Self> {
        Self::leaf(Leaf::U32(v))
    }

    /// An unsigned 64-bit integer value.
    pub fn u64(v: u64) -> Result<Self> {
        Self::leaf(Leaf::U64(v))
    }

    /// An unsigned 128-bit integer value.
    pub fn u128(v: u128) -> Result<Self> {
        Self::leaf(Leaf::U128(v))
    }

    /// An unsigned 256-bit integer value from big-endian bytes.
    pub fn u256(v: [u8; 32]) -> Result<Self> {
        Self::leaf(Leaf::U256(v))
    }

    /// An IEEE 754 binary32 value. NaN canonicalizes before hashing.
    pub fn f32(v: f32) -> Result<Self> {
        Self::leaf(Leaf::F32(v))
    }

    /// An IEEE 754 binary64 value. NaN canonicalizes before hashing.
    pub fn f64(v: f64) -> Result<Self> {
        Self::leaf(Leaf::F64(v))
    }

    /// A Unicode code point value.
    pub fn char(v: char) -> Result<Self> {
        Self::leaf(Leaf::Char(v))
    }

    /// A string value. Its identity folds the `char` leaf hashes of the
    /// code points in order.
    pub fn string(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        let data = seq::string_data_hash(&s)?;
        let hash = fuse(TypeTag::String.hash(), data)?;
        Ok(Self {
            kind: Arc::new(Kind::String(s)),
            hash,
        })
    }

    /// A blob value. Its identity folds the `u8` leaf hashes of the
    /// bytes in order.
    pub fn blob(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        let data = seq::blob_data_hash(&bytes)?;
        let hash = fuse(TypeTag::Blob.hash(), data)?;
        Ok(Self {
            kind: Arc::new(Kind::Blob(bytes)),
            hash,
        })
    }

    /// A vector value. Its identity folds the children's value hashes in
    /// order; the children's own representation never re-enters the
    /// computation.
    pub fn vector(children: Vec<Value>) -> Result<Self> {
        let data = seq::fold(children.iter().map(|child| Ok(child.hash())))?;
        let hash = fuse(TypeTag::Vector.hash(), data)?;
        Ok(Self {
            kind: Arc::new(Kind::Vector(children)),
            hash,
        })
    }

    /// A map value from key-value pairs. A later entry with an
    /// already-present key replaces the earlier one; identity is a
    /// function of the surviving entry multiset, not of insertion order.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Result<Self> {
        let mut hamt = HamtMap::new();
        for (k, v) in entries {
            hamt.insert(k, v);
        }
        Self::from_hamt(hamt)
    }

    /// A map value from an already-built trie.
    pub fn from_hamt(hamt: HamtMap) -> Result<Self> {
        let data = map::entries_data_hash(hamt.iter())?;
        let hash = fuse(TypeTag::Map.hash(), data)?;
        Ok(Self {
            kind: Arc::new(Kind::Map(hamt)),
            hash,
        })
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Value {}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.hash.as_bytes().hash(state);
    }
}
