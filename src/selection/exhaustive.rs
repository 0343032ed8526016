use super::{ensure_not_empty, pairwise_pass, Incumbent, SelectionStrategy};
use crate::{
    error::Result,
    function::ObjectiveFunction,
    rng::RandomNumberGenerator,
    search::SearchStats,
    variation::{Variation, Vector},
};

/// Brute-force selection.
///
/// Breeds every ordered pair of the population exactly once, so a call performs
/// `population.len()²` evaluations, and returns the best child.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustivePairwise;

impl SelectionStrategy for ExhaustivePairwise {
    fn best(
        &self,
        population: &[Vector],
        function: &dyn ObjectiveFunction,
        variation: &Variation,
        rng: &mut RandomNumberGenerator,
        stats: &SearchStats,
    ) -> Result<Vector> {
        ensure_not_empty(population)?;

        let mut incumbent = Incumbent::new();
        pairwise_pass(population, function, variation, rng, stats, &mut incumbent)?;

        incumbent.into_solution()
    }

    fn title(&self) -> &str {
        "Brute Force"
    }
}
