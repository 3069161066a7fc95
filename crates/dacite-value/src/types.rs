//! The type registry.
//!
//! Every type is named by a UTF-8 string and identified by the SHA-256 of
//! those bytes. The registry is open: extension names hash the same way
//! without central coordination, and uniqueness is the extender's
//! responsibility. Two distinct names with identical SHA-256 would alias
//! types; this is accepted as a cryptographic impossibility.

use std::sync::OnceLock;

use dacite_hash::Hash;

/// Canonical built-in type names, exact UTF-8 bytes.
///
/// Built-ins live in the reserved `dacite.core/` namespace.
pub mod names {
    /// The null type.
    pub const NULL: &str = "dacite.core/null";
    /// The boolean type.
    pub const BOOL: &str = "dacite.core/bool";
    /// Signed 8-bit integer.
    pub const I8: &str = "dacite.core/i8";
    /// Signed 16-bit integer.
    pub const I16: &str = "dacite.core/i16";
    /// Signed 32-bit integer.
    pub const I32: &str = "dacite.core/i32";
    /// Signed 64-bit integer.
    pub const I64: &str = "dacite.core/i64";
    /// Signed 128-bit integer.
    pub const I128: &str = "dacite.core/i128";
    /// Signed 256-bit integer.
    pub const I256: &str = "dacite.core/i256";
    /// Unsigned 8-bit integer.
    pub const U8: &str = "dacite.core/u8";
    /// Unsigned 16-bit integer.
    pub const U16: &str = "dacite.core/u16";
    /// Unsigned 32-bit integer.
    pub const U32: &str = "dacite.core/u32";
    /// Unsigned 64-bit integer.
    pub const U64: &str = "dacite.core/u64";
    /// Unsigned 128-bit integer.
    pub const U128: &str = "dacite.core/u128";
    /// Unsigned 256-bit integer.
    pub const U256: &str = "dacite.core/u256";
    /// IEEE 754 binary32.
    pub const F32: &str = "dacite.core/f32";
    /// IEEE 754 binary64.
    pub const F64: &str = "dacite.core/f64";
    /// A Unicode code point.
    pub const CHAR: &str = "dacite.core/char";
    /// A sequence of code points.
    pub const STRING: &str = "dacite.core/string";
    /// A sequence of bytes.
    pub const BLOB: &str = "dacite.core/blob";
    /// A sequence of arbitrary values.
    pub const VECTOR: &str = "dacite.core/vector";
    /// An unordered collection of key-value entries.
    pub const MAP: &str = "dacite.core/map";
}

/// Hash a canonical type name: `SHA-256(utf8(name))`.
///
/// Stable and pre-computable, no ambient state. Extension types use this
/// directly with their own names.
pub fn type_hash(name: &str) -> Hash {
    Hash::digest(name.as_bytes())
}

/// Tag identifying one of the built-in types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `dacite.core/null`
    Null,
    /// `dacite.core/bool`
    Bool,
    /// `dacite.core/i8`
    I8,
    /// `dacite.core/i16`
    I16,
    /// `dacite.core/i32`
    I32,
    /// `dacite.core/i64`
    I64,
    /// `dacite.core/i128`
    I128,
    /// `dacite.core/i256`
    I256,
    /// `dacite.core/u8`
    U8,
    /// `dacite.core/u16`
    U16,
    /// `dacite.core/u32`
    U32,
    /// `dacite.core/u64`
    U64,
    /// `dacite.core/u128`
    U128,
    /// `dacite.core/u256`
    U256,
    /// `dacite.core/f32`
    F32,
    /// `dacite.core/f64`
    F64,
    /// `dacite.core/char`
    Char,
    /// `dacite.core/string`
    String,
    /// `dacite.core/blob`
    Blob,
    /// `dacite.core/vector`
    Vector,
    /// `dacite.core/map`
    Map,
}

impl TypeTag {
    /// Every built-in tag, in declaration order.
    pub const ALL: [TypeTag; 21] = [
        TypeTag::Null,
        TypeTag::Bool,
        TypeTag::I8,
        TypeTag::I16,
        TypeTag::I32,
        TypeTag::I64,
        TypeTag::I128,
        TypeTag::I256,
        TypeTag::U8,
        TypeTag::U16,
        TypeTag::U32,
        TypeTag::U64,
        TypeTag::U128,
        TypeTag::U256,
        TypeTag::F32,
        TypeTag::F64,
        TypeTag::Char,
        TypeTag::String,
        TypeTag::Blob,
        TypeTag::Vector,
        TypeTag::Map,
    ];

    /// The canonical name of this built-in.
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::Null => names::NULL,
            TypeTag::Bool => names::BOOL,
            TypeTag::I8 => names::I8,
            TypeTag::I16 => names::I16,
            TypeTag::I32 => names::I32,
            TypeTag::I64 => names::I64,
            TypeTag::I128 => names::I128,
            TypeTag::I256 => names::I256,
            TypeTag::U8 => names::U8,
            TypeTag::U16 => names::U16,
            TypeTag::U32 => names::U32,
            TypeTag::U64 => names::U64,
            TypeTag::U128 => names::U128,
            TypeTag::U256 => names::U256,
            TypeTag::F32 => names::F32,
            TypeTag::F64 => names::F64,
            TypeTag::Char => names::CHAR,
            TypeTag::String => names::STRING,
            TypeTag::Blob => names::BLOB,
            TypeTag::Vector => names::VECTOR,
            TypeTag::Map => names::MAP,
        }
    }

    /// The type hash of this built-in.
    ///
    /// Served from a table computed once at first use and read-only
    /// thereafter.
    pub fn hash(self) -> Hash {
        builtin_table()[self as usize]
    }
}

fn builtin_table() -> &'static [Hash; 21] {
    static TABLE: OnceLock<[Hash; 21]> = OnceLock::new();
    TABLE.get_or_init(|| TypeTag::ALL.map(|tag| type_hash(tag.name())))
}
