//! Bit-string conversions
//!
//! Bit strings are plain `String`s of `'0'` and `'1'`, most significant bit
//! first. This is the representation the signature protocol works in, so no
//! packing into bytes happens here.

/// Convert text to its binary representation
///
/// Each UTF-8 byte contributes exactly eight bits, most significant first:
/// `"A"` becomes `"01000001"`.
pub fn plaintext_to_bits(text: &str) -> String {
    let mut bits = String::with_capacity(text.len() * 8);
    for byte in text.bytes() {
        bits.push_str(&format!("{:08b}", byte));
    }
    bits
}

/// Split a bit string into consecutive blocks of `width` bits
///
/// The final block keeps whatever bits remain and may be shorter than
/// `width`. A zero width yields no blocks.
pub fn split_blocks(bits: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = bits.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Encode `value` as a binary string, left-padded with zeros to `width` bits
///
/// Values that need more than `width` bits are written in full.
pub fn to_binary(value: u64, width: usize) -> String {
    format!("{:0width$b}", value, width = width)
}

/// Decode a binary string into an integer
///
/// Returns `None` for an empty string, for any character other than `'0'`
/// or `'1'`, and for values that overflow `u64`.
pub fn from_binary(bits: &str) -> Option<u64> {
    if bits.is_empty() {
        return None;
    }
    bits.chars().try_fold(0u64, |acc, c| {
        let bit = match c {
            '0' => 0,
            '1' => 1,
            _ => return None,
        };
        acc.checked_mul(2)?.checked_add(bit)
    })
}
