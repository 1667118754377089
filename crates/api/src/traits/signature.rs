//! Digital signature trait for ecgost
//!
//! Unlike a stateless signature API, a GOST engine owns its domain
//! parameters, key pair and subgroup cache, so signing and verifying are
//! methods on an engine instance.

use crate::Result;

/// Core trait for an instantiated signature engine
pub trait SignatureScheme {
    /// Public key type for this scheme
    type PublicKey: Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Returns the name of this signature scheme
    fn name() -> &'static str;

    /// Public key of the engine's key pair
    fn public_key(&self) -> Self::PublicKey;

    /// Sign `message` with the engine's private key
    fn sign(&mut self, message: &str) -> Result<Self::SignatureData>;

    /// Check `signature` against `message` and the engine's public key
    ///
    /// Never fails: any problem with the signature yields `false`.
    fn verify(&mut self, message: &str, signature: &Self::SignatureData) -> bool;
}
