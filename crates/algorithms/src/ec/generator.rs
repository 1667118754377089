//! Search for a base point of prime order `q`

use std::collections::BTreeMap;

use super::{Curve, Point, Subgroup};
use crate::error::{validate, Error, Result};

/// How much of the subgroup the search builds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubgroupMode {
    /// Accept the first candidate with `q·P = O`; the table holds `{1, q}`
    #[default]
    BasePointOnly,
    /// Walk `2P, 3P, …` and keep every multiple up to `qP`
    Materialize,
}

/// Find the first candidate that generates a subgroup of order `q`
///
/// Candidates are tried in the order given. Points with `y = 0` have order 2
/// and are skipped outright; the rest must satisfy `q·P = O`. Under
/// [`SubgroupMode::Materialize`] the multiples are also walked one addition
/// at a time, and the candidate is dropped if the identity shows up before
/// `q` or fails to show up at `q`.
pub fn find_base_point(
    curve: &Curve,
    candidates: &[Point],
    q: u64,
    mode: SubgroupMode,
) -> Result<Subgroup> {
    validate::parameter(q >= 2, "q", "subgroup order must be at least 2")?;
    let order = i64::try_from(q).map_err(|_| Error::param("q", "subgroup order too large"))?;

    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.is_identity() || candidate.y() == 0 {
            continue;
        }
        let candidate = candidate.with_scalar(1);

        if !curve.multiply(&candidate, order)?.is_identity() {
            continue;
        }

        match mode {
            SubgroupMode::BasePointOnly => {
                tracing::info!(index, base = %candidate, q, "found base point");
                return Ok(Subgroup::new(candidate, q));
            }
            SubgroupMode::Materialize => {
                if let Some(table) = materialize(curve, &candidate, q) {
                    tracing::info!(index, base = %candidate, q, "found base point, subgroup materialized");
                    return Ok(Subgroup::from_table(candidate, q, table));
                }
                tracing::debug!(index, base = %candidate, "candidate has the wrong order");
            }
        }
    }

    Err(Error::NoGenerator { order: q })
}

fn materialize(curve: &Curve, base: &Point, q: u64) -> Option<BTreeMap<u64, Point>> {
    let mut table = BTreeMap::new();
    table.insert(1, *base);

    let mut current = *base;
    for multiplier in 2..=q + 1 {
        current = curve.add(base, &current);
        table.insert(multiplier, current);
        if current.is_identity() {
            return (multiplier == q).then_some(table);
        }
    }
    None
}
