//! Affine curve points with an explicit identity flag

use std::fmt;

use ecgost_common::math_common::mod_positive;

/// A point on a short Weierstrass curve, or the identity
///
/// Coordinates of points produced by [`Curve`](super::Curve) are reduced into
/// `[0, p)`. The identity carries coordinates `(0, 0)` plus a flag, so it can
/// never be confused with a genuine curve point `(0, 0)`.
///
/// `scalar` records "this point is `scalar·P`" for whichever base point
/// produced it. It is bookkeeping only and takes no part in equality.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: i64,
    y: i64,
    is_identity: bool,
    scalar: Option<u64>,
}

impl Point {
    /// Affine point `(x, y)`; coordinates are taken as given
    pub fn new(x: i64, y: i64) -> Self {
        Point {
            x,
            y,
            is_identity: false,
            scalar: None,
        }
    }

    /// The point at infinity
    pub fn identity() -> Self {
        Point {
            x: 0,
            y: 0,
            is_identity: true,
            scalar: None,
        }
    }

    /// Check if this point is the identity element
    pub fn is_identity(&self) -> bool {
        self.is_identity
    }

    /// Get the x-coordinate
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Get the y-coordinate
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Multiplier recorded for this point, if any
    pub fn scalar(&self) -> Option<u64> {
        self.scalar
    }

    /// Same point tagged as `scalar·P`
    pub fn with_scalar(mut self, scalar: u64) -> Self {
        self.scalar = Some(scalar);
        self
    }

    /// Same point with the multiplier tag dropped
    pub fn untagged(mut self) -> Self {
        self.scalar = None;
        self
    }

    /// Whether `self + other` is the identity under modulus `p`
    ///
    /// True when the x coordinates agree mod `p` and the y coordinates are
    /// negatives of each other mod `p`. An order-2 point (`y ≡ 0`) is its own
    /// inverse, and the identity is the inverse of itself only.
    pub fn is_inverse_of(&self, other: &Point, p: i64) -> bool {
        match (self.is_identity, other.is_identity) {
            (true, true) => true,
            (false, false) => {
                mod_positive(self.x - other.x, p) == 0 && mod_positive(self.y + other.y, p) == 0
            }
            _ => false,
        }
    }

    /// Additive inverse `(x, -y)` reduced into `[0, p)`
    ///
    /// The multiplier tag is dropped since it would need the subgroup order
    /// to stay meaningful.
    pub fn negate(&self, p: i64) -> Point {
        if self.is_identity {
            return *self;
        }
        Point::new(mod_positive(self.x, p), mod_positive(-self.y, p))
    }

    /// Copy with both coordinates reduced into `[0, p)`
    pub fn reduced(&self, p: i64) -> Point {
        if self.is_identity {
            return *self;
        }
        Point {
            x: mod_positive(self.x, p),
            y: mod_positive(self.y, p),
            ..*self
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_identity, other.is_identity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl Eq for Point {}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity {
            return f.write_str("O");
        }
        match self.scalar {
            Some(k) => write!(f, "{}P({}, {})", k, self.x, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}
