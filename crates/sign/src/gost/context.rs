//! Working state of single sign and verify runs
//!
//! A context is created fresh per operation, filled in step by step and kept
//! by the engine afterwards for inspection.

use ecgost_algorithms::ec::Point;
use ecgost_algorithms::hash::Digest;
use ecgost_api::Error as ApiError;
use zeroize::Zeroize;

use super::SignatureBits;

/// Values produced while signing one message
#[derive(Clone, Debug)]
pub struct SigningContext {
    /// Message being signed
    pub message: String,
    /// `l`-bit blocks of the message, parsed
    pub blocks: Vec<u64>,
    /// Hash of the blocks
    pub digest: Option<Digest>,
    /// `e = a mod q`, forced to 1 when zero
    pub e: u64,
    /// Number of ephemeral scalars drawn so far
    pub attempts: u32,
    /// Ephemeral scalar of the accepted attempt; wiped on drop
    pub k: Option<u64>,
    /// `r = x(kP) mod q`
    pub r: u64,
    /// `s = (r·d + k·e) mod q`
    pub s: u64,
    /// Final `r‖s`
    pub signature: Option<SignatureBits>,
}

impl SigningContext {
    pub(crate) fn new(message: &str) -> Self {
        SigningContext {
            message: message.to_owned(),
            blocks: Vec::new(),
            digest: None,
            e: 0,
            attempts: 0,
            k: None,
            r: 0,
            s: 0,
            signature: None,
        }
    }
}

impl Drop for SigningContext {
    fn drop(&mut self) {
        self.k.zeroize();
    }
}

/// Values recovered while verifying one signature
#[derive(Clone, Debug)]
pub struct VerificationContext {
    /// Message the signature is checked against
    pub message: String,
    /// Signature under test
    pub signature: SignatureBits,
    /// Decoded `r`
    pub r: Option<u64>,
    /// Decoded `s`
    pub s: Option<u64>,
    /// Recomputed hash
    pub digest: Option<Digest>,
    /// `e = a mod q`, forced to 1 when zero
    pub e: Option<u64>,
    /// `v = e⁻¹ mod q`
    pub v: Option<u64>,
    /// `z1 = s·v mod q`
    pub z1: Option<u64>,
    /// `z2 = -r·v mod q`
    pub z2: Option<u64>,
    /// `C = z1·P + z2·Q`
    pub point: Option<Point>,
    /// `R = x(C) mod q`
    pub recovered_r: Option<u64>,
    /// Final verdict
    pub accepted: bool,
    /// Why the signature was rejected, as `SignatureRejected { step, .. }`
    pub rejection: Option<ApiError>,
}

impl VerificationContext {
    pub(crate) fn new(message: &str, signature: SignatureBits) -> Self {
        VerificationContext {
            message: message.to_owned(),
            signature,
            r: None,
            s: None,
            digest: None,
            e: None,
            v: None,
            z1: None,
            z2: None,
            point: None,
            recovered_r: None,
            accepted: false,
            rejection: None,
        }
    }
}
