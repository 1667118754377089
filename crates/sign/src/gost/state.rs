//! Engine lifecycle

use core::fmt;

/// Where the engine is in its lifecycle
///
/// Setup runs `Idle → ParamsSet → KeysSet` inside the builder, so a built
/// engine starts in `KeysSet`. Signing walks `Signing(1..=6)` and ends in
/// `Signed`; verifying walks `Verifying(1..=7)` and ends in `Verified` or
/// `Rejected`. A failed signing run falls back to `KeysSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineState {
    /// Nothing chosen yet
    Idle,
    /// Domain parameters and base point fixed
    ParamsSet,
    /// Key pair fixed; ready to sign and verify
    KeysSet,
    /// Inside signing step `n`
    Signing(u8),
    /// Last operation produced a signature
    Signed,
    /// Inside verification step `n`
    Verifying(u8),
    /// Last verification accepted
    Verified,
    /// Last verification rejected
    Rejected,
}

impl EngineState {
    /// Whether sign and verify may be invoked
    pub fn is_ready(&self) -> bool {
        !matches!(self, EngineState::Idle | EngineState::ParamsSet)
    }

    /// Protocol step currently running, if any
    pub fn step(&self) -> Option<u8> {
        match self {
            EngineState::Signing(n) | EngineState::Verifying(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineState::Idle => f.write_str("idle"),
            EngineState::ParamsSet => f.write_str("parameters set"),
            EngineState::KeysSet => f.write_str("keys set"),
            EngineState::Signing(n) => write!(f, "signing, step {}", n),
            EngineState::Signed => f.write_str("signed"),
            EngineState::Verifying(n) => write!(f, "verifying, step {}", n),
            EngineState::Verified => f.write_str("verified"),
            EngineState::Rejected => f.write_str("rejected"),
        }
    }
}
