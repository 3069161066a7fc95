//! Error types for hash operations.

use thiserror::Error;

/// Errors that can occur while producing or parsing hashes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// `fuse` produced an output whose four words all have zero in their
    /// low 32 bits. Repeated or degenerate inputs can drift mixing into
    /// this subspace; the result would poison downstream trie indexing
    /// and must not cross an API boundary.
    #[error("fuse output lost entropy: low 32 bits of every word are zero")]
    LowEntropy,

    /// Invalid byte length for a 256-bit hash.
    #[error("Invalid hash length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected byte length.
        expected: usize,
        /// Actual byte length.
        actual: usize,
    },

    /// Invalid hex string format.
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),
}

/// Result type for hash operations.
pub type Result<T> = std::result::Result<T, HashError>;
