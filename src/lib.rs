//! # Tribloom
//!
//! A fixed-capacity Bloom filter over string keys. Each key sets three cells of
//! the bit array, derived from an FNV-style hash and a Murmur3-style hash via
//! double hashing.

pub mod bloom;
pub mod hash;

pub use bloom::{BloomFilter, BloomStats};
pub use hash::{fnv_hash, murmur_hash3};

// Python bindings
#[cfg(feature = "python")]
pub mod python_module;

/// Common error types for the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BloomError {
    InvalidArgument(String),
}

impl std::fmt::Display for BloomError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BloomError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for BloomError {}

pub type Result<T> = std::result::Result<T, BloomError>;
