//! Public API traits and types for the ecgost library
//!
//! This crate provides the public API surface shared by the ecgost crates:
//! the error type every fallible operation returns, the signature scheme
//! trait, and the narration interface used for step-by-step diagnostics.

pub mod error;
pub mod narrator;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use narrator::{Narrator, SilentNarrator, StyleHint, TracingNarrator};
pub use traits::SignatureScheme;
