//! # ecgost
//!
//! A GOST R 34.10-2012 style elliptic-curve signature scheme over small prime
//! fields, with every primitive built from integer arithmetic: curve
//! enumeration, the group law, generator search, a block-sum hash and the
//! sign/verify protocol.
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `sign` (default): the signature engine
//! - `trace`: narrate every protocol step as `tracing` events
//! - `logging`: [`logging::init_logging`] installs a `tracing-subscriber`
//! - `serde`: `Serialize`/`Deserialize` for points, curves and configuration
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from the sub-crates:
//!
//! - `ecgost-api`: error type, `SignatureScheme` trait, narration
//! - `ecgost-common`: modular arithmetic, primes, bit strings, random draws
//! - `ecgost-params`: constants and the reference domain
//! - `ecgost-algorithms`: curve group, scalar multiplication, hash
//! - `ecgost-sign`: the signature engine
//!
//! ## Example
//!
//! ```
//! use ecgost::prelude::*;
//! use ecgost::params::traditional::gost::GOST_TEST_101;
//!
//! let mut signer = GostSigner::builder().domain(GOST_TEST_101).build()?;
//! let signature = signer.sign("APR")?;
//! assert!(signer.verify(Some(&signature)));
//! # Ok::<(), ecgost::sign::Error>(())
//! ```

pub use ecgost_algorithms as algorithms;
pub use ecgost_api as api;
pub use ecgost_common as common;
pub use ecgost_params as params;

#[cfg(feature = "sign")]
pub use ecgost_sign as sign;

#[cfg(feature = "logging")]
pub mod logging;

/// Common imports for ecgost users
pub mod prelude {
    pub use crate::api::{Error, Narrator, Result, SignatureScheme, SilentNarrator, StyleHint};

    pub use crate::algorithms::ec::{Curve, CurveGroup, DomainParameters, Point, SubgroupMode};
    pub use crate::algorithms::hash::{BlockHash, Digest};

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        EngineState, GostBuilder, GostSigner, PublicKey, SignatureBits, VerifyStrategy,
    };
}
