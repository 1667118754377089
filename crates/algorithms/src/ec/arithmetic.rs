//! Point addition and doubling over `GF(p)`
//!
//! Field division is done by [`exact_division_search`]: rather than
//! multiplying by an inverse, the dividend is lifted by multiples of `p`
//! until the divisor goes into it exactly. For a prime `p` and a divisor
//! coprime to it the lift is found within `divisor` steps, and the quotient
//! equals `dividend · divisor⁻¹ mod p`.

use ecgost_common::math_common::{gcd, mod_mul, mod_positive, mod_sub};

use super::{Curve, Point};

/// Result of an exact division search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExactQuotient {
    /// `(dividend + p·multiplier) / divisor`, in `[0, p)`
    pub quotient: i64,
    /// Smallest `e ≥ 0` making the division exact
    pub multiplier: i64,
}

/// Divide `dividend` by `divisor` in `GF(p)` by searching for an exact lift
///
/// Both operands are reduced mod `p` first. Finds the smallest `e ≥ 0` with
/// `(dividend + p·e) mod divisor == 0`. Returns `None` when the divisor is
/// `≡ 0 (mod p)` or shares a factor with `p`, in which case no field quotient
/// exists.
pub fn exact_division_search(dividend: i64, divisor: i64, p: i64) -> Option<ExactQuotient> {
    let divisor = mod_positive(divisor, p);
    if divisor == 0 || gcd(divisor, p) != 1 {
        return None;
    }
    let dividend = mod_positive(dividend, p);

    (0..divisor)
        .find(|e| (dividend + p * e) % divisor == 0)
        .map(|e| ExactQuotient {
            quotient: (dividend + p * e) / divisor,
            multiplier: e,
        })
}

fn sum_scalars(lhs: &Point, rhs: &Point) -> Option<u64> {
    lhs.scalar()?.checked_add(rhs.scalar()?)
}

fn tag(point: Point, scalar: Option<u64>) -> Point {
    match scalar {
        Some(k) => point.with_scalar(k),
        None => point.untagged(),
    }
}

impl Curve {
    /// Group law: `lhs + rhs`
    ///
    /// The identity is neutral on either side. Otherwise, in order: mutual
    /// inverses give the identity, equal points are doubled, and distinct
    /// points use the chord rule. When both operands carry a multiplier the
    /// result carries their sum.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        let scalar = sum_scalars(lhs, rhs);

        if lhs.is_identity() {
            return tag(*rhs, scalar);
        }
        if rhs.is_identity() {
            return tag(*lhs, scalar);
        }

        let p = self.p();
        let lhs = lhs.reduced(p);
        let rhs = rhs.reduced(p);

        let sum = if lhs.is_inverse_of(&rhs, p) {
            tracing::trace!(%lhs, %rhs, "operands are mutual inverses");
            Point::identity()
        } else if lhs == rhs {
            self.double(&lhs)
        } else {
            self.add_distinct(&lhs, &rhs)
        };

        tag(sum, scalar)
    }

    /// Tangent rule for `2·point`
    ///
    /// `λ = (3x² + a) / 2y`, `x3 = λ² − 2x`, `y3 = λ(x − x3) − y`. The two
    /// divisions are resolved by independent searches. A point with `y ≡ 0`
    /// doubles to the identity.
    pub fn double(&self, point: &Point) -> Point {
        if point.is_identity() {
            return *point;
        }

        let p = self.p();
        let (x1, y1) = (mod_positive(point.x(), p), mod_positive(point.y(), p));

        let numerator = mod_positive(mod_mul(3, mod_mul(x1, x1, p), p) + self.a(), p);
        let denominator = mod_mul(2, y1, p);

        let Some(slope_sq) = exact_division_search(
            mod_mul(numerator, numerator, p),
            mod_mul(denominator, denominator, p),
            p,
        ) else {
            tracing::trace!(point = %point, "vertical tangent");
            return Point::identity();
        };
        let x3 = mod_sub(slope_sq.quotient, mod_mul(2, x1, p), p);

        let Some(slope_run) = exact_division_search(mod_mul(numerator, x1 - x3, p), denominator, p)
        else {
            return Point::identity();
        };
        let y3 = mod_sub(slope_run.quotient, y1, p);

        tracing::trace!(
            point = %point,
            x3,
            y3,
            e_x = slope_sq.multiplier,
            e_y = slope_run.multiplier,
            "doubled point"
        );
        Point::new(x3, y3)
    }

    /// Chord rule for two distinct, non-inverse points
    ///
    /// `λ = (y2 − y1) / (x2 − x1)`, `x3 = λ² − x1 − x2`, `y3 = λ(x1 − x3) − y1`.
    /// A vertical chord (`x1 ≡ x2`) gives the identity.
    pub fn add_distinct(&self, lhs: &Point, rhs: &Point) -> Point {
        let p = self.p();
        let (x1, y1) = (mod_positive(lhs.x(), p), mod_positive(lhs.y(), p));
        let (x2, y2) = (mod_positive(rhs.x(), p), mod_positive(rhs.y(), p));

        let dy = mod_sub(y2, y1, p);
        let dx = mod_sub(x2, x1, p);
        if dx == 0 {
            tracing::trace!(%lhs, %rhs, "vertical chord");
            return Point::identity();
        }

        let dx_sq = mod_mul(dx, dx, p);
        // λ² − x1 − x2 over the common denominator dx²
        let dividend = mod_sub(mod_mul(dy, dy, p), mod_mul(dx_sq, x1 + x2, p), p);
        let Some(x_step) = exact_division_search(dividend, dx_sq, p) else {
            return Point::identity();
        };
        let x3 = x_step.quotient;

        let Some(y_step) = exact_division_search(mod_mul(dy, x1 - x3, p), dx, p) else {
            return Point::identity();
        };
        let y3 = mod_sub(y_step.quotient, y1, p);

        tracing::trace!(
            %lhs,
            %rhs,
            x3,
            y3,
            e_x = x_step.multiplier,
            e_y = y_step.multiplier,
            "added points"
        );
        Point::new(x3, y3)
    }

    /// Additive inverse on this curve
    pub fn negate(&self, point: &Point) -> Point {
        point.negate(self.p())
    }
}
