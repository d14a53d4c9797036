//! Fixed-capacity Bloom filter
//!
//! Every key maps to three cells of a bit array of `size` bits. The first two
//! come straight from the two base hashes, the third from their combination
//! `h1 + 2 * h2`, so only two real hashes are computed per key.

use crate::{hash, BloomError, Result};
use bit_vec::BitVec;
use tracing::{debug, trace, warn};

/// Number of cells touched per key
pub const NUM_POSITIONS: usize = 3;

/// A fixed-size Bloom filter over string keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter {
    /// Bit array, always exactly `size` bits long
    bits: BitVec,
    size: u32,
    /// Number of `add` calls since construction or the last clear
    insertions: usize,
}

impl BloomFilter {
    /// Create an empty filter with `size` cells
    ///
    /// Fails with [`BloomError::InvalidArgument`] when `size` is zero.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            warn!("rejected bloom filter with zero size");
            return Err(BloomError::InvalidArgument(
                "size must be greater than 0".to_string(),
            ));
        }

        debug!(size, "created bloom filter");

        Ok(BloomFilter {
            bits: BitVec::from_elem(size as usize, false),
            size,
            insertions: 0,
        })
    }

    /// Cell indices for `key`
    ///
    /// The three positions may coincide, which lowers the effective number of
    /// hash functions for that key but never causes a false negative.
    pub fn positions(&self, key: &str) -> [u32; NUM_POSITIONS] {
        let (h1, h2) = hash::base_hashes(key);
        let h3 = h1.wrapping_add(h2.wrapping_mul(2));
        [h1 % self.size, h2 % self.size, h3 % self.size]
    }

    /// Insert a key into the filter
    pub fn add(&mut self, key: &str) {
        let positions = self.positions(key);
        for &pos in &positions {
            self.bits.set(pos as usize, true);
        }
        self.insertions += 1;

        trace!(key, ?positions, "added key");
    }

    /// Check if a key might be in the filter
    /// Returns true if the key might be present (with possible false positives)
    /// Returns false if the key is definitely not present
    pub fn contains(&self, key: &str) -> bool {
        self.positions(key)
            .iter()
            .all(|&pos| self.bits.get(pos as usize).unwrap_or(false))
    }

    /// Reset every cell to zero
    pub fn clear(&mut self) {
        // BitVec::clear zeroes the bits but keeps the length
        self.bits.clear();
        self.insertions = 0;

        debug!(size = self.size, "cleared bloom filter");
    }

    /// Number of cells in the filter
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of cells currently set
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&bit| bit).count()
    }

    /// True when no cell is set
    pub fn is_empty(&self) -> bool {
        self.bits.none()
    }

    /// Number of `add` calls since construction or the last clear
    ///
    /// Repeated keys are counted every time.
    pub fn insertions(&self) -> usize {
        self.insertions
    }

    /// Get the current load factor (fraction of bits set)
    pub fn load_factor(&self) -> f64 {
        self.count_ones() as f64 / self.size as f64
    }

    /// Chance that a key never added is reported present
    ///
    /// Assumes the three positions behave like independent hashes.
    pub fn estimated_fpr(&self) -> f64 {
        self.load_factor().powi(NUM_POSITIONS as i32)
    }

    /// Get statistics about the filter
    pub fn stats(&self) -> BloomStats {
        BloomStats {
            size: self.size,
            set_bits: self.count_ones(),
            insertions: self.insertions,
            load_factor: self.load_factor(),
            estimated_fpr: self.estimated_fpr(),
        }
    }
}

/// Signed construction path for callers whose sizes arrive as signed integers.
///
/// Negative and zero sizes are rejected like a zero `u32`, and sizes above
/// `u32::MAX` are rejected outright.
impl TryFrom<i64> for BloomFilter {
    type Error = BloomError;

    fn try_from(size: i64) -> Result<Self> {
        if size <= 0 {
            warn!(size, "rejected bloom filter with non-positive size");
            return Err(BloomError::InvalidArgument(
                "size must be greater than 0".to_string(),
            ));
        }
        let size = u32::try_from(size).map_err(|_| {
            BloomError::InvalidArgument(format!("size must be at most {}", u32::MAX))
        })?;
        BloomFilter::new(size)
    }
}

/// Statistics about a Bloom filter
#[derive(Debug, Clone)]
pub struct BloomStats {
    pub size: u32,
    pub set_bits: usize,
    pub insertions: usize,
    pub load_factor: f64,
    pub estimated_fpr: f64,
}

impl std::fmt::Display for BloomStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter Stats:\n\
             - Size: {} bits\n\
             - Bits set: {}\n\
             - Insertions: {}\n\
             - Load factor: {:.3}\n\
             - Estimated FPR: {:.6}",
            self.size, self.set_bits, self.insertions, self.load_factor, self.estimated_fpr
        )
    }
}
