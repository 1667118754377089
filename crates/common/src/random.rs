//! Uniform random selection helpers
//!
//! The protocol only ever asks for "an integer uniformly from a closed range"
//! or "any element of this table"; both are thin wrappers over
//! [`rand::Rng`] so every caller can inject its own generator.

use rand::seq::SliceRandom;
use rand::Rng;

/// Draw an integer uniformly from the closed range `[low, high]`
///
/// Returns `None` when the range is empty (`low > high`).
pub fn uniform_int<R: Rng, T>(rng: &mut R, low: T, high: T) -> Option<T>
where
    T: rand::distributions::uniform::SampleUniform + PartialOrd + Copy,
{
    if low > high {
        return None;
    }
    Some(rng.gen_range(low..=high))
}

/// Pick one element of `table` uniformly
///
/// Returns `None` for an empty table.
pub fn choice_from<'a, R: Rng, T>(rng: &mut R, table: &'a [T]) -> Option<&'a T> {
    table.choose(rng)
}

#[cfg(test)]
mod tests;
