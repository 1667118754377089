//! Elliptic curve group over a small prime field
//!
//! The pieces, leaves first:
//!
//! - [`Point`]: affine point or identity, with a multiplier tag
//! - [`Curve`]: validated `(p, a, b)` plus the group law
//! - [`CurveGroup`]: every point of the curve and the group order `m`
//! - [`summands`] / [`Curve::multiply`]: scalar multiplication
//! - [`find_base_point`]: generator of a prime-order subgroup
//! - [`Subgroup`]: the multiplier → point table for that generator

mod arithmetic;
mod curve;
mod generator;
mod point;
mod scalar_mul;
mod subgroup;

pub use arithmetic::{exact_division_search, ExactQuotient};
pub use curve::{derive_subgroup_order, Curve, CurveGroup, DomainParameters};
pub use generator::{find_base_point, SubgroupMode};
pub use point::Point;
pub use scalar_mul::summands;
pub use subgroup::Subgroup;
