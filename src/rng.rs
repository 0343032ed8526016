//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single random source threaded through
//! a search. It wraps the `rand` crate's `StdRng` so a run can be made reproducible
//! by seeding it.
//!
//! ## Example
//!
//! ```rust
//! use recsel::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let coin = rng.next_bool();
//! let unit = rng.next_f64();
//!
//! assert!((0.0..1.0).contains(&unit));
//! # let _ = coin;
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the search needs.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    ///
    /// # Arguments
    ///
    /// * `seed` - The seed to use for the random number generator.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fair coin flip.
    pub fn next_bool(&mut self) -> bool {
        self.rng.gen::<bool>()
    }

    /// Uniform sample from `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Draws a seed for a child generator.
    ///
    /// Parallel builders hand one child generator to each worker so the outcome
    /// only depends on the parent seed, not on thread scheduling.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.gen::<u64>()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
