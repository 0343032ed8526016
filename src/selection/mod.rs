//! # Selection Strategies
//!
//! A selection strategy reduces a population to the one vector that represents it
//! one level up. Both strategies here breed every ordered pair of the population
//! (self-pairs included), score each child and keep the lowest fitness seen.

pub mod exhaustive;
pub mod local_search;

use std::fmt::Debug;

use crate::{
    error::{OptionExt, Result, SearchError},
    function::ObjectiveFunction,
    rng::RandomNumberGenerator,
    search::SearchStats,
    variation::{Variation, Vector},
};

pub use exhaustive::ExhaustivePairwise;
pub use local_search::IterativeLocalSearch;

/// Trait for selection strategies.
///
/// # Examples
///
/// ```
/// use recsel::function::Rastrigin;
/// use recsel::rng::RandomNumberGenerator;
/// use recsel::search::SearchStats;
/// use recsel::selection::{ExhaustivePairwise, SelectionStrategy};
/// use recsel::variation::Variation;
/// use recsel::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![vec![1.0, 2.0], vec![-0.5, 0.25], vec![3.0, -3.0]];
///     let mut rng = RandomNumberGenerator::from_seed(5);
///     let stats = SearchStats::new();
///
///     let best = ExhaustivePairwise.best(
///         &population,
///         &Rastrigin,
///         &Variation::default(),
///         &mut rng,
///         &stats,
///     )?;
///
///     assert_eq!(best.len(), 2);
///     assert_eq!(stats.evaluations(), 9);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Returns the best child bred from the population.
    ///
    /// Every child produced is counted in `stats`. The returned vector has the
    /// lowest fitness of all children produced during the call.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The population holds vectors of different length
    /// - No child scored below positive infinity
    fn best(
        &self,
        population: &[Vector],
        function: &dyn ObjectiveFunction,
        variation: &Variation,
        rng: &mut RandomNumberGenerator,
        stats: &SearchStats,
    ) -> Result<Vector>;

    /// Display name.
    fn title(&self) -> &str;
}

impl<T: SelectionStrategy + ?Sized> SelectionStrategy for Box<T> {
    fn best(
        &self,
        population: &[Vector],
        function: &dyn ObjectiveFunction,
        variation: &Variation,
        rng: &mut RandomNumberGenerator,
        stats: &SearchStats,
    ) -> Result<Vector> {
        (**self).best(population, function, variation, rng, stats)
    }

    fn title(&self) -> &str {
        (**self).title()
    }
}

/// Best child seen so far.
#[derive(Debug, Clone)]
pub(crate) struct Incumbent {
    solution: Option<Vector>,
    fitness: f64,
}

impl Incumbent {
    pub(crate) fn new() -> Self {
        Self {
            solution: None,
            fitness: f64::INFINITY,
        }
    }

    pub(crate) fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Replaces the incumbent on strict improvement only. NaN never improves.
    fn offer(&mut self, child: Vector, fitness: f64) -> bool {
        if fitness < self.fitness {
            self.solution = Some(child);
            self.fitness = fitness;
            true
        } else {
            false
        }
    }

    pub(crate) fn into_solution(self) -> Result<Vector> {
        self.solution.ok_or_else_search(|| {
            SearchError::InvalidNumericValue(
                "No child scored below positive infinity".to_string(),
            )
        })
    }
}

/// Breeds all `size²` ordered pairs once, offering each child to the incumbent.
///
/// Returns `true` if the incumbent improved at least once.
pub(crate) fn pairwise_pass(
    population: &[Vector],
    function: &dyn ObjectiveFunction,
    variation: &Variation,
    rng: &mut RandomNumberGenerator,
    stats: &SearchStats,
    incumbent: &mut Incumbent,
) -> Result<bool> {
    let mut improved = false;

    for first in population {
        for second in population {
            let child = variation.offspring(first, second, rng)?;
            let fitness = function.calculate(&child);
            stats.record_evaluation();

            if incumbent.offer(child, fitness) {
                improved = true;
            }
        }
    }

    Ok(improved)
}

pub(crate) fn ensure_not_empty(population: &[Vector]) -> Result<()> {
    if population.is_empty() {
        return Err(SearchError::EmptyPopulation);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Rastrigin;

    #[test]
    fn test_incumbent_strict_improvement() {
        let mut incumbent = Incumbent::new();

        assert!(!incumbent.offer(vec![1.0], f64::NAN));
        assert!(!incumbent.offer(vec![1.0], f64::INFINITY));
        assert!(incumbent.offer(vec![2.0], 5.0));
        assert!(!incumbent.offer(vec![3.0], 5.0));
        assert!(incumbent.offer(vec![4.0], 4.5));

        assert_eq!(incumbent.fitness(), 4.5);
        assert_eq!(incumbent.into_solution(), Ok(vec![4.0]));
    }

    #[test]
    fn test_empty_incumbent_is_error() {
        assert!(matches!(
            Incumbent::new().into_solution(),
            Err(SearchError::InvalidNumericValue(_))
        ));
    }

    #[test]
    fn test_pass_rejects_ragged_population() {
        let population = vec![vec![0.0, 0.0], vec![0.0]];
        let mut incumbent = Incumbent::new();

        let result = pairwise_pass(
            &population,
            &Rastrigin,
            &Variation::default(),
            &mut RandomNumberGenerator::new(),
            &SearchStats::new(),
            &mut incumbent,
        );

        assert!(matches!(result, Err(SearchError::DimensionMismatch { .. })));
    }
}
