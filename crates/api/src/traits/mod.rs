//! Trait definitions for ecgost

pub mod signature;

pub use signature::SignatureScheme;
