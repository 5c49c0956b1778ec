//! The source of randomness used by the graph generator and trial runner.
//!
//! Any [`rand::Rng`] is a [`RandomSource`], so a seeded
//! [`rand::rngs::StdRng`] gives reproducible graphs.  Tests that need exact
//! control over the draws can implement the trait directly.

use std::ops::{Range, RangeInclusive};

use rand::Rng;

pub trait RandomSource {
    /// Picks `amount` distinct values uniformly from `range`.  The caller must
    /// ensure the range holds at least `amount` values.
    fn sample_distinct(&mut self, range: Range<usize>, amount: usize) -> Vec<usize>;

    /// Picks an integer uniformly from `range`.
    fn int_in_range(&mut self, range: RangeInclusive<u32>) -> u32;
}

impl<R> RandomSource for R
where
    R: Rng,
{
    fn sample_distinct(&mut self, range: Range<usize>, amount: usize) -> Vec<usize> {
        debug_assert!(range.len() >= amount);
        rand::seq::index::sample(self, range.len(), amount)
            .into_iter()
            .map(|offset| range.start + offset)
            .collect()
    }

    fn int_in_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.gen_range(range)
    }
}
