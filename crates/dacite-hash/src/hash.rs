//! The 256-bit content address.
//!
//! A [`Hash`] has two interchangeable representations: a 32-byte
//! big-endian buffer (canonical for I/O, equality, and ordering) and four
//! 64-bit unsigned words (for the arithmetic inside [`fuse`]). Word w0
//! occupies bytes 0–7, w3 bytes 24–31, most-significant-first.
//!
//! [`fuse`]: crate::fuse::fuse

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A 256-bit (32-byte) content address.
///
/// Ordering is unsigned big-endian byte-lexicographic over the canonical
/// form, which is what the map hasher sorts entries by.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hash([u8; 32]);

impl Hash {
    /// Hash size in bytes.
    pub const SIZE: usize = 32;

    /// SHA-256 of `data`.
    ///
    /// This is the only digest in the engine; leaf data hashes and type
    /// hashes are both produced here. The digest context is per-call.
    pub fn digest(data: &[u8]) -> Self {
        let digest = Sha256::digest(data);
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&digest);
        Self(arr)
    }

    /// SHA-256 over several inputs, each length-prefixed.
    ///
    /// The prefix prevents concatenation ambiguity between the parts.
    pub fn digest_many(inputs: &[&[u8]]) -> Self {
        let mut hasher = Sha256::new();
        for input in inputs {
            hasher.update((input.len() as u64).to_be_bytes());
            hasher.update(input);
        }
        let digest = hasher.finalize();
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&digest);
        Self(arr)
    }

    /// Create a `Hash` from its canonical 32-byte big-endian form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(crate::HashError::InvalidLength {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Get the canonical bytes as a slice.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to an owned byte array.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Read the canonical buffer as four 64-bit words, big-endian,
    /// most-significant word first.
    pub fn to_words(self) -> [u64; 4] {
        let b = &self.0;
        [
            u64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]),
            u64::from_be_bytes([b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]]),
            u64::from_be_bytes([b[16], b[17], b[18], b[19], b[20], b[21], b[22], b[23]]),
            u64::from_be_bytes([b[24], b[25], b[26], b[27], b[28], b[29], b[30], b[31]]),
        ]
    }

    /// Exact inverse of [`to_words`](Self::to_words).
    pub fn from_words(words: [u64; 4]) -> Self {
        let mut bytes = [0u8; 32];
        bytes[0..8].copy_from_slice(&words[0].to_be_bytes());
        bytes[8..16].copy_from_slice(&words[1].to_be_bytes());
        bytes[16..24].copy_from_slice(&words[2].to_be_bytes());
        bytes[24..32].copy_from_slice(&words[3].to_be_bytes());
        Self(bytes)
    }

    /// True iff the low 32 bits of every word are zero — 128 bits of zero
    /// in aggregate. Such a value signals a loss of effective entropy and
    /// is rejected by the checked [`fuse`](crate::fuse::fuse).
    pub fn is_low_entropy(&self) -> bool {
        self.to_words().iter().all(|w| w & 0xFFFF_FFFF == 0)
    }

    /// Format as a lowercase hex string (64 characters) — the wire text
    /// form of a content address.
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(64);
        for byte in &self.0 {
            s.push_str(&format!("{byte:02x}"));
        }
        s
    }

    /// Parse from a 64-character hex string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid 64-character hex.
    pub fn from_hex(s: &str) -> crate::Result<Self> {
        if s.len() != 64 {
            return Err(crate::HashError::InvalidLength {
                expected: 64,
                actual: s.len(),
            });
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in s.as_bytes().chunks(2).enumerate() {
            let hex_str = std::str::from_utf8(chunk)
                .map_err(|_| crate::HashError::InvalidHex("invalid UTF-8 in hex string".into()))?;
            bytes[i] = u8::from_str_radix(hex_str, 16).map_err(|_| {
                crate::HashError::InvalidHex(format!("invalid hex character at position {}", i * 2))
            })?;
        }
        Ok(Self(bytes))
    }

    /// Truncated representation for logs and display: first 16 hex
    /// characters followed by `...`.
    pub fn short(&self) -> String {
        format!("{}...", &self.to_hex()[..16])
    }
}

impl std::fmt::Debug for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hash({})", self.short())
    }
}

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
