//! Deterministic RNG for synthetic passenger traffic.
//!
//! The offline simulator can inject random hall and car calls on top of a
//! scripted scenario.  All randomness comes from one seeded `SmallRng`, so
//! the same seed and scenario always produce the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG used by the traffic generator.
///
/// Used only from the single simulation thread.
pub struct TrafficRng(SmallRng);

impl TrafficRng {
    pub fn new(seed: u64) -> Self {
        TrafficRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice, or `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
