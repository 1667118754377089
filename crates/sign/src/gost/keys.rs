//! Key pair types

use core::fmt;

use ecgost_algorithms::ec::Point;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Signing key `d ∈ [1, q-1]`
///
/// Wiped on drop. `Debug` never prints the value.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    d: u64,
}

impl PrivateKey {
    /// Wrap `d` after checking `1 ≤ d < q`
    pub fn new(d: u64, q: u64) -> Result<Self> {
        if d == 0 || d >= q {
            return Err(Error::KeyGeneration {
                algorithm: super::ALGORITHM,
                details: format!("private key {} is outside [1, {}]", d, q.saturating_sub(1)),
            });
        }
        Ok(PrivateKey { d })
    }

    /// The scalar `d`
    pub fn value(&self) -> u64 {
        self.d
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// Verification key `Q = d·P`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey(Point);

impl PublicKey {
    pub(crate) fn new(point: Point) -> Self {
        PublicKey(point)
    }

    /// The point `Q`
    pub fn point(&self) -> &Point {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q = {}", self.0)
    }
}
