//! GOST R 34.10-2012 style digital signatures over small prime fields
//!
//! This crate holds the signature engine: domain setup, key pair, the block
//! hash and the sign/verify protocol, driven as a small state machine on top
//! of `ecgost-algorithms`.

pub mod error;
pub mod gost;

pub use error::{Error, Result};
pub use gost::{
    EngineState, GostBuilder, GostSigner, PrivateKey, PublicKey, SignatureBits,
    SigningContext, VerificationContext, VerifyStrategy,
};
