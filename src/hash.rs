//! Hash functions for Bloom filters
//!
//! Two independent 32-bit hashes drive bit selection: an FNV-style multiply/xor
//! hash over the key's characters, and a Murmur3-style block hash over its
//! UTF-8 bytes. Both use wrapping `u32` arithmetic throughout.

/// FNV offset basis
pub const FNV_OFFSET_BASIS: u32 = 2166136261;

/// Multiplier applied before each character is folded in
pub const FNV_PRIME: u32 = 37;

/// Fixed seed of the Murmur3 hash
pub const MURMUR_SEED: u32 = 2;

const C1: u32 = 0xcc9e2d51;
const C2: u32 = 0x1b873593;
const N: u32 = 0xe6546b64;
const FMIX1: u32 = 0x85ebca6b;
const FMIX2: u32 = 0xc2b2ae35;

/// FNV-style hash over the Unicode scalar values of `key`.
///
/// Each step multiplies the running hash by [`FNV_PRIME`] and then xors in the
/// character's code point, so `"é"` contributes `0xe9`, not its two UTF-8 bytes.
pub fn fnv_hash(key: &str) -> u32 {
    key.chars().fold(FNV_OFFSET_BASIS, |hash, ch| {
        hash.wrapping_mul(FNV_PRIME) ^ ch as u32
    })
}

/// Murmur3-style hash of the UTF-8 encoding of `key`, seeded with [`MURMUR_SEED`].
pub fn murmur_hash3(key: &str) -> u32 {
    murmur_hash3_bytes(key.as_bytes())
}

/// Murmur3-style 32-bit hash over raw bytes.
///
/// Unlike reference MurmurHash3, blocks are read big-endian and a trailing
/// partial block is packed into the high bytes of the word and mixed like a
/// full block.
pub fn murmur_hash3_bytes(bytes: &[u8]) -> u32 {
    let mut hash = MURMUR_SEED;

    for chunk in bytes.chunks(4) {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);

        let mut k = u32::from_be_bytes(word);
        k = k.wrapping_mul(C1);
        k = k.rotate_left(15);
        k = k.wrapping_mul(C2);

        hash ^= k;
        hash = hash.rotate_left(13);
        hash = hash.wrapping_mul(5).wrapping_add(N);
    }

    // length is truncated to 32 bits
    hash ^= bytes.len() as u32;
    fmix32(hash)
}

#[inline]
fn fmix32(mut hash: u32) -> u32 {
    hash ^= hash >> 16;
    hash = hash.wrapping_mul(FMIX1);
    hash ^= hash >> 13;
    hash = hash.wrapping_mul(FMIX2);
    hash ^= hash >> 16;
    hash
}

/// Both base hashes of `key`, as `(fnv, murmur)`
#[inline]
pub fn base_hashes(key: &str) -> (u32, u32) {
    (fnv_hash(key), murmur_hash3(key))
}
