//! Error types for value construction.

use thiserror::Error;

/// Errors that can occur while constructing values.
///
/// The engine has a single failure mode: `fuse` rejecting a low-entropy
/// output. Collection hashers do not catch it — a low-entropy hash
/// mid-fold is evidence of a degenerate input and is surfaced to the
/// caller, who may retry with a distinguishing salt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A hash-level failure, surfaced unchanged.
    #[error(transparent)]
    Hash(#[from] dacite_hash::HashError),
}

/// Result type for value construction.
pub type Result<T> = std::result::Result<T, ValueError>;
