//! Block-sum message hashing
//!
//! A message is turned into bits (eight per UTF-8 byte), cut into blocks of
//! `l = bitLength(q)` bits and each block read as an unsigned integer. The
//! hash sums the blocks and reduces the sum modulo a power of two. The
//! variant fixes which power, and is chosen once when the engine is built.

use ecgost_common::bits::{from_binary, plaintext_to_bits, split_blocks};
use ecgost_common::math_common::bit_length;

/// Output of a [`BlockHash`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digest {
    /// Reduced hash value
    pub value: u64,
    /// Unreduced block sum (wrapping in `u64`)
    pub sum: u64,
}

/// Hash function variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockHash {
    /// `Σ blocks mod 2^l` with `l = bitLength(q)`
    #[default]
    BlockSum,
    /// `Σ blocks mod 2^⌊log₂ q⌋`
    FloorLog2BlockSum,
}

impl BlockHash {
    /// Number of bits kept from the block sum for subgroup order `q`
    pub fn digest_bits(&self, q: u64) -> u32 {
        match self {
            BlockHash::BlockSum => bit_length(q),
            BlockHash::FloorLog2BlockSum => bit_length(q).saturating_sub(1),
        }
    }

    /// Hash already-parsed blocks for subgroup order `q`
    ///
    /// Pure: identical blocks always give an identical [`Digest`].
    pub fn digest(&self, blocks: &[u64], q: u64) -> Digest {
        let sum = blocks.iter().fold(0u64, |acc, &b| acc.wrapping_add(b));
        let bits = self.digest_bits(q);
        // 2^64 is a multiple of 2^bits, so masking the wrapped sum is exact
        let value = if bits >= u64::BITS {
            sum
        } else {
            sum & ((1u64 << bits) - 1)
        };
        Digest { value, sum }
    }

    /// Convert, block and hash a message in one go
    pub fn hash_message(&self, message: &str, q: u64) -> Digest {
        self.digest(&message_blocks(message, bit_length(q)), q)
    }
}

/// Split `message` into `width`-bit blocks and parse each one
///
/// The last block keeps the leftover bits unpadded, so `"A"` with width 3
/// gives `[0b010, 0b000, 0b01]`.
pub fn message_blocks(message: &str, width: u32) -> Vec<u64> {
    let bits = plaintext_to_bits(message);
    split_blocks(&bits, width as usize)
        .iter()
        .filter_map(|block| from_binary(block))
        .collect()
}
