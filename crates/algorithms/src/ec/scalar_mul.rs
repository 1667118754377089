//! Scalar multiplication by summand decomposition
//!
//! `k·P` is built by repeated additions whose right-hand operands always come
//! from a cache of multiples computed earlier in the same run. The summand
//! sequence first doubles (`1, 2, 4, …`) up to the largest power of two not
//! exceeding `k`, then adds the remaining binary digits from the top down,
//! each of which is one of the powers already cached.

use std::collections::BTreeMap;

use super::{Curve, Point};
use crate::error::{Error, Result};

/// Summand sequence for `k ≥ 1`
///
/// The first entry is the seed `1` (the base point itself); every later entry
/// is a multiplier added to the running total. For `k = 13` this is
/// `[1, 1, 2, 4, 4, 1]`: running totals `1, 2, 4, 8, 12, 13`. Returns an
/// empty sequence for `k = 0`.
pub fn summands(k: u64) -> Vec<u64> {
    if k == 0 {
        return Vec::new();
    }

    let mut sequence = vec![1];
    let mut reached = 1u64;
    while reached <= k / 2 {
        sequence.push(reached);
        reached *= 2;
    }

    let mut remainder = k - reached;
    let mut power = reached / 2;
    while remainder > 0 && power > 0 {
        if power <= remainder {
            sequence.push(power);
            remainder -= power;
        }
        power /= 2;
    }

    sequence
}

impl Curve {
    /// Compute `k·point`
    ///
    /// `k = 0` gives the identity and a negative `k` multiplies the negated
    /// point. When `point` carries a multiplier tag `t`, a positive result
    /// carries `t·k`.
    pub fn multiply(&self, point: &Point, k: i64) -> Result<Point> {
        if k < 0 {
            let positive = self.multiply_unsigned(point, k.unsigned_abs())?;
            return Ok(self.negate(&positive));
        }
        self.multiply_unsigned(point, k as u64)
    }

    /// Compute `k·point` for a non-negative multiplier
    pub fn multiply_unsigned(&self, point: &Point, k: u64) -> Result<Point> {
        if k == 0 || point.is_identity() {
            return Ok(Point::identity());
        }

        let unit = point.scalar();
        let tagged = |pt: Point, multiplier: u64| match unit.and_then(|t| t.checked_mul(multiplier)) {
            Some(s) => pt.with_scalar(s),
            None => pt.untagged(),
        };

        let sequence = summands(k);
        let mut cache: BTreeMap<u64, Point> = BTreeMap::new();
        let base = point.untagged();
        cache.insert(1, base);

        let mut current = base;
        let mut total = 1u64;
        for &summand in sequence.iter().skip(1) {
            let addend = cache
                .get(&summand)
                .copied()
                .ok_or(Error::MissingSummand { summand, target: k })?;
            current = self.add(&current, &addend);
            total += summand;
            cache.insert(total, current);
        }

        tracing::trace!(k, steps = sequence.len(), "scalar multiplication");

        cache
            .get(&k)
            .map(|pt| tagged(*pt, k))
            .ok_or(Error::MissingSummand { summand: k, target: k })
    }
}
