//! Curve definition, point enumeration and group order

use std::collections::HashMap;

use ecgost_common::math_common::{bit_length, is_prime, mod_add, mod_mul, mod_positive, prime_factors};
use ecgost_params::traditional::gost::{CurveDomain, MAX_MODULUS};

use super::Point;
use crate::error::{validate, Error, Result};

/// Short Weierstrass curve `y² = x³ + a·x + b` over `GF(p)`
///
/// Construction validates the domain: `p` is a prime in `(3, MAX_MODULUS]`
/// and the curve is non-singular. `a` and `b` are stored reduced mod `p`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    p: i64,
    a: i64,
    b: i64,
}

impl Curve {
    /// Check that `p` can serve as the field modulus
    pub fn validate_modulus(p: i64) -> Result<()> {
        validate::domain(p > 3, "curve", "modulus p must be greater than 3")?;
        validate::domain(
            p <= MAX_MODULUS,
            "curve",
            "modulus p exceeds the supported field size",
        )?;
        if !is_prime(p) {
            return Err(Error::domain("curve", format!("modulus p = {} is not prime", p)));
        }
        Ok(())
    }

    /// Validate `(p, a, b)` and build the curve
    pub fn new(p: i64, a: i64, b: i64) -> Result<Self> {
        Self::validate_modulus(p)?;

        let a = mod_positive(a, p);
        let b = mod_positive(b, p);

        // 4a³ + 27b² ≢ 0 (mod p)
        let a3 = mod_mul(mod_mul(a, a, p), a, p);
        let b2 = mod_mul(b, b, p);
        let discriminant = mod_add(mod_mul(4, a3, p), mod_mul(27, b2, p), p);
        if discriminant == 0 {
            return Err(Error::domain(
                "curve",
                format!("curve y² = x³ + {}x + {} over GF({}) is singular", a, b, p),
            ));
        }

        Ok(Curve { p, a, b })
    }

    /// Build a curve from a parameter table entry
    pub fn from_domain(domain: CurveDomain) -> Result<Self> {
        Self::new(domain.p, domain.a, domain.b)
    }

    /// Field modulus
    pub fn p(&self) -> i64 {
        self.p
    }

    /// Linear coefficient, reduced
    pub fn a(&self) -> i64 {
        self.a
    }

    /// Constant coefficient, reduced
    pub fn b(&self) -> i64 {
        self.b
    }

    /// Right-hand side `x³ + a·x + b mod p`
    pub fn rhs(&self, x: i64) -> i64 {
        let p = self.p;
        let x = mod_positive(x, p);
        let x3 = mod_mul(mod_mul(x, x, p), x, p);
        mod_add(mod_add(x3, mod_mul(self.a, x, p), p), self.b, p)
    }

    /// Check whether a point satisfies the curve equation
    ///
    /// The identity is always on the curve.
    pub fn contains(&self, point: &Point) -> bool {
        if point.is_identity() {
            return true;
        }
        let y = mod_positive(point.y(), self.p);
        mod_mul(y, y, self.p) == self.rhs(point.x())
    }
}

/// Every point of a curve together with the group order
///
/// `points` holds one entry per x coordinate that lies on the curve, in
/// enumeration order (x from `-(p-1)/2` to `(p-1)/2`), with `y` the
/// non-negative root in `[0, (p-1)/2]`. The mirrored point `(x, -y)` is
/// derived on demand with [`Point::negate`].
#[derive(Clone, Debug)]
pub struct CurveGroup {
    curve: Curve,
    points: Vec<Point>,
    order: u64,
}

impl CurveGroup {
    /// Enumerate the curve and count its points
    pub fn build(curve: Curve) -> Result<Self> {
        let p = curve.p();
        let half = (p - 1) / 2;

        // quadratic residue -> root in [0, (p-1)/2]
        let mut roots: HashMap<i64, i64> = HashMap::with_capacity(half as usize + 1);
        for r in 0..=half {
            roots.insert(mod_mul(r, r, p), r);
        }

        let mut points = Vec::new();
        let mut count: u64 = 0;
        for x in -half..=half {
            let rhs = curve.rhs(x);
            if let Some(&y) = roots.get(&rhs) {
                count += if rhs == 0 { 1 } else { 2 };
                points.push(Point::new(mod_positive(x, p), y));
            }
        }

        if points.is_empty() {
            return Err(Error::domain("curve group", "curve has no affine points"));
        }

        let order = count + 1;
        tracing::info!(p, a = curve.a(), b = curve.b(), order, "enumerated curve points");

        Ok(CurveGroup {
            curve,
            points,
            order,
        })
    }

    /// Underlying curve
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// One point per x coordinate, in enumeration order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Group order `m`, identity included
    pub fn order(&self) -> u64 {
        self.order
    }

    /// Every group element: both roots for each x, then the identity
    pub fn all_points(&self) -> impl Iterator<Item = Point> + '_ {
        let p = self.curve.p();
        self.points
            .iter()
            .flat_map(move |pt| {
                let mirror = (pt.y() != 0).then(|| pt.negate(p));
                std::iter::once(*pt).chain(mirror)
            })
            .chain(std::iter::once(Point::identity()))
    }

    /// Fix the subgroup order and collect the full domain
    pub fn domain_parameters(&self) -> Result<DomainParameters> {
        let q = derive_subgroup_order(self.order)?;
        tracing::info!(m = self.order, q, "derived subgroup order");
        Ok(DomainParameters {
            p: self.curve.p(),
            a: self.curve.a(),
            b: self.curve.b(),
            m: self.order,
            q,
        })
    }
}

/// Pick the subgroup order `q` for a group of order `m`
///
/// Scans the distinct prime factors of `m` from largest to smallest and
/// returns the first that divides `m` evenly.
pub fn derive_subgroup_order(m: u64) -> Result<u64> {
    prime_factors(m)
        .into_iter()
        .find(|&q| m % q == 0)
        .ok_or_else(|| {
            Error::domain(
                "subgroup order",
                format!("no valid subgroup order for m = {}", m),
            )
        })
}

/// The tuple `(p, a, b, m, q)` fixed for one key pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainParameters {
    /// Prime field modulus
    pub p: i64,
    /// Linear curve coefficient
    pub a: i64,
    /// Constant curve coefficient
    pub b: i64,
    /// Order of the full point group
    pub m: u64,
    /// Prime order of the working subgroup
    pub q: u64,
}

impl DomainParameters {
    /// Cofactor `m / q`
    pub fn cofactor(&self) -> u64 {
        self.m / self.q
    }

    /// Bit length `l` of `q`; width of hash blocks and signature halves
    pub fn signature_width(&self) -> u32 {
        bit_length(self.q)
    }
}
