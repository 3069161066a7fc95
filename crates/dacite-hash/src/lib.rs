//! # dacite-hash
//!
//! Content-address primitives for Dacite, the substrate for distributed,
//! immutable, content-addressed data structures.
//!
//! This crate provides:
//!
//! - **[`Hash`]**: an opaque 256-bit value with a canonical 32-byte
//!   big-endian form, a four-word view for mixing arithmetic, hex text
//!   form, and serde support
//! - **Digest**: SHA-256 over byte sequences ([`Hash::digest`])
//! - **[`fuse`]**: the associative, non-commutative mixer that combines
//!   two hashes, with low-entropy rejection
//!
//! Everything here is a pure, deterministic function with no shared
//! mutable state; callers may invoke the crate from any number of
//! threads concurrently.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod fuse;
pub mod hash;

#[cfg(test)]
mod proptests;

pub use error::{HashError, Result};
pub use fuse::{fuse, fuse_unchecked, index_salt};
pub use hash::Hash;
