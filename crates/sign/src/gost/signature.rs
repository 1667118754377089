//! Bit-string signatures `ζ = r‖s`

use core::fmt;

use ecgost_common::bits::{from_binary, to_binary};

/// A signature as a string of `'0'`/`'1'`
///
/// A well-formed signature is `2·l` bits: `r` then `s`, each zero-padded to
/// `l = bitLength(q)` bits. Any string can be wrapped; verification decides
/// whether it is acceptable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignatureBits(String);

impl SignatureBits {
    /// Wrap an arbitrary bit string
    pub fn new(bits: impl Into<String>) -> Self {
        SignatureBits(bits.into())
    }

    /// Encode `r‖s` with `width` bits per half
    pub fn encode(r: u64, s: u64, width: u32) -> Self {
        let width = width as usize;
        SignatureBits(format!("{}{}", to_binary(r, width), to_binary(s, width)))
    }

    /// Decode the two `width`-bit halves
    ///
    /// `None` unless the string is exactly `2·width` binary digits.
    pub fn decode(&self, width: u32) -> Option<(u64, u64)> {
        let width = width as usize;
        if width == 0 || self.0.len() != 2 * width || !self.0.is_ascii() {
            return None;
        }
        let (r, s) = self.0.split_at(width);
        Some((from_binary(r)?, from_binary(s)?))
    }

    /// The raw bit string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the string is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SignatureBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SignatureBits {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SignatureBits {
    fn from(bits: String) -> Self {
        SignatureBits(bits)
    }
}

impl From<&str> for SignatureBits {
    fn from(bits: &str) -> Self {
        SignatureBits(bits.to_owned())
    }
}
