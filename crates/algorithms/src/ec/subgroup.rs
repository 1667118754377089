//! Cyclic subgroup table indexed by multiplier

use std::collections::BTreeMap;

use super::{Curve, Point};
use crate::error::{Error, Result};

/// The subgroup `⟨P⟩` of prime order `q` as a multiplier → point table
///
/// Keys live in `1..=q`; key `q` is the identity. The table starts with
/// `{1: P, q: O}` and only ever grows: entries are inserted as multiples
/// are computed and are never evicted or replaced.
#[derive(Clone, Debug)]
pub struct Subgroup {
    base: Point,
    order: u64,
    table: BTreeMap<u64, Point>,
    complete: bool,
}

impl Subgroup {
    /// Seed the table with the base point and the identity
    pub(crate) fn new(base: Point, order: u64) -> Self {
        let base = base.with_scalar(1);
        let mut table = BTreeMap::new();
        table.insert(1, base);
        table.insert(order, Point::identity().with_scalar(order));
        Subgroup {
            base,
            order,
            complete: order <= 2,
            table,
        }
    }

    pub(crate) fn from_table(base: Point, order: u64, table: BTreeMap<u64, Point>) -> Self {
        let complete = (1..=order).all(|k| table.contains_key(&k));
        Subgroup {
            base: base.with_scalar(1),
            order,
            table,
            complete,
        }
    }

    /// Base point `P`
    pub fn base(&self) -> &Point {
        &self.base
    }

    /// Prime order `q`
    pub fn order(&self) -> u64 {
        self.order
    }

    /// Number of cached multiples
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table has no entries; never true for a seeded table
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether every multiple `1..=q` is cached
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Iterate cached `(multiplier, point)` pairs in multiplier order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Point)> {
        self.table.iter().map(|(k, pt)| (*k, pt))
    }

    fn key(&self, k: u64) -> u64 {
        match k % self.order {
            0 => self.order,
            r => r,
        }
    }

    /// Cached `k·P` (`k` taken mod `q`)
    ///
    /// A miss is an [`Error::MissingMultiple`]; use [`Subgroup::point_at`] to
    /// compute and cache instead.
    pub fn lookup(&self, k: u64) -> Result<Point> {
        let key = self.key(k);
        self.table
            .get(&key)
            .copied()
            .ok_or(Error::MissingMultiple { multiplier: key })
    }

    /// `k·P` (`k` taken mod `q`), computing and caching it on a miss
    pub fn point_at(&mut self, curve: &Curve, k: u64) -> Result<Point> {
        let key = self.key(k);
        if let Some(point) = self.table.get(&key) {
            return Ok(*point);
        }

        let point = curve.multiply_unsigned(&self.base, key)?;
        self.table.insert(key, point);
        if self.table.len() as u64 == self.order {
            self.complete = true;
        }
        Ok(point)
    }
}
