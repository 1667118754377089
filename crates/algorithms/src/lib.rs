//! Elliptic-curve primitives for the ecgost library
//!
//! Everything here is built from integer arithmetic: point enumeration,
//! the group law with search-based field division, scalar multiplication,
//! generator discovery and the toy block-sum hash.

pub mod ec;
pub mod error;
pub mod hash;

pub use ec::{
    Curve, CurveGroup, DomainParameters, ExactQuotient, Point, Subgroup, SubgroupMode,
};
pub use error::{Error, Result};
pub use hash::{BlockHash, Digest};
