//! # Variation
//!
//! Uniform crossover and additive mutation on real vectors.
//!
//! ## Example
//!
//! ```rust
//! use recsel::rng::RandomNumberGenerator;
//! use recsel::variation::Variation;
//!
//! let variation = Variation::default();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let child = variation.offspring(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &mut rng).unwrap();
//! assert_eq!(child.len(), 3);
//! ```

use crate::{
    error::{Result, SearchError},
    rng::RandomNumberGenerator,
};

/// One candidate solution.
pub type Vector = Vec<f64>;

/// Default probability of perturbing one component.
pub const DEFAULT_MUTATION_RATE: f64 = 0.01;

/// Crossover and mutation operators sharing one mutation rate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variation {
    mutation_rate: f64,
}

impl Variation {
    /// Creates the operators with the given mutation rate.
    ///
    /// # Errors
    ///
    /// Returns an error if `mutation_rate` is not within `[0, 1]`.
    pub fn new(mutation_rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(SearchError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                mutation_rate
            )));
        }

        Ok(Self { mutation_rate })
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Uniform crossover.
    ///
    /// Every component of the child is copied from `first` or `second` with a fair
    /// coin flip. No interpolation takes place.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DimensionMismatch`] if the parents differ in length.
    pub fn crossover(
        &self,
        first: &[f64],
        second: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vector> {
        if first.len() != second.len() {
            return Err(SearchError::DimensionMismatch {
                first: first.len(),
                second: second.len(),
            });
        }

        Ok(first
            .iter()
            .zip(second)
            .map(|(&a, &b)| if rng.next_bool() { a } else { b })
            .collect())
    }

    /// Mutates the vector in place.
    ///
    /// Each component is shifted by a uniform value from `[-0.5, 0.5)` with
    /// probability equal to the mutation rate. Results are not clamped to the
    /// objective function's bounds.
    pub fn mutate(&self, vector: &mut [f64], rng: &mut RandomNumberGenerator) {
        for component in vector.iter_mut() {
            if rng.next_f64() >= self.mutation_rate {
                continue;
            }

            *component += rng.next_f64() - 0.5;
        }
    }

    /// Crossover followed by mutation of the child.
    pub fn offspring(
        &self,
        first: &[f64],
        second: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vector> {
        let mut child = self.crossover(first, second, rng)?;
        self.mutate(&mut child, rng);
        Ok(child)
    }
}

impl Default for Variation {
    fn default() -> Self {
        Self {
            mutation_rate: DEFAULT_MUTATION_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossover_of_identical_parents() {
        let variation = Variation::default();
        let mut rng = RandomNumberGenerator::new();
        let parent = vec![0.25, -3.0, 17.5, 1e-9];

        let child = variation.crossover(&parent, &parent, &mut rng).unwrap();
        assert_eq!(child, parent);
    }

    #[test]
    fn test_crossover_keeps_provenance() {
        let variation = Variation::default();
        let mut rng = RandomNumberGenerator::from_seed(3);
        let first = vec![1.0; 64];
        let second = vec![2.0; 64];

        let child = variation.crossover(&first, &second, &mut rng).unwrap();
        assert_eq!(child.len(), 64);
        assert!(child.iter().all(|&c| c == 1.0 || c == 2.0));
        assert!(child.contains(&1.0) && child.contains(&2.0));
    }

    #[test]
    fn test_crossover_rejects_mismatched_parents() {
        let variation = Variation::default();
        let mut rng = RandomNumberGenerator::new();

        let result = variation.crossover(&[1.0, 2.0], &[1.0], &mut rng);
        assert_eq!(
            result,
            Err(SearchError::DimensionMismatch {
                first: 2,
                second: 1
            })
        );
    }

    #[test]
    fn test_zero_rate_leaves_vector_unchanged() {
        let variation = Variation::new(0.0).unwrap();
        let mut rng = RandomNumberGenerator::new();
        let original = vec![0.1, 0.2, 0.3, 0.4];
        let mut vector = original.clone();

        for _ in 0..100 {
            variation.mutate(&mut vector, &mut rng);
        }
        assert_eq!(vector, original);
    }

    #[test]
    fn test_full_rate_is_deterministic_and_bounded() {
        let variation = Variation::new(1.0).unwrap();
        let original = vec![0.0; 16];

        let mut first = original.clone();
        variation.mutate(&mut first, &mut RandomNumberGenerator::from_seed(11));
        let mut second = original.clone();
        variation.mutate(&mut second, &mut RandomNumberGenerator::from_seed(11));

        assert_eq!(first, second);
        assert!(first.iter().all(|&c| c != 0.0 && (-0.5..0.5).contains(&c)));
    }

    #[test]
    fn test_invalid_rates() {
        assert!(Variation::new(-0.1).is_err());
        assert!(Variation::new(1.5).is_err());
        assert!(Variation::new(f64::NAN).is_err());
    }
}
