use tracing::{debug, warn};

use super::{ensure_not_empty, pairwise_pass, Incumbent, SelectionStrategy};
use crate::{
    error::{Result, SearchError},
    function::ObjectiveFunction,
    rng::RandomNumberGenerator,
    search::SearchStats,
    variation::{Variation, Vector},
};

/// Iterate-to-fixpoint selection.
///
/// Repeats the brute-force pass over the population until a whole round fails to
/// improve on the best child carried over from earlier rounds. The first round
/// consumes random draws exactly like [`ExhaustivePairwise`](super::ExhaustivePairwise),
/// so with the same generator state the result is never worse.
///
/// Without a round limit the loop has no hard cap. It ends once resampled
/// children stop beating the optimum, which happens with high probability but is
/// not guaranteed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeLocalSearch {
    round_limit: Option<usize>,
}

impl IterativeLocalSearch {
    /// Creates the search without a round limit.
    pub fn new() -> Self {
        Self { round_limit: None }
    }

    /// Creates the search stopping after at most `round_limit` rounds.
    ///
    /// This is a diagnostic safety net for tests and benchmarks. Reaching the
    /// limit returns the best child found so far.
    ///
    /// # Errors
    ///
    /// Returns an error if `round_limit` is 0.
    pub fn with_round_limit(round_limit: usize) -> Result<Self> {
        if round_limit == 0 {
            return Err(SearchError::Configuration(
                "Round limit must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            round_limit: Some(round_limit),
        })
    }

    pub fn round_limit(&self) -> Option<usize> {
        self.round_limit
    }
}

impl SelectionStrategy for IterativeLocalSearch {
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
        let mut round = 0;

        loop {
            round += 1;
            let improved =
                pairwise_pass(population, function, variation, rng, stats, &mut incumbent)?;
            debug!(round, improved, optimum = incumbent.fitness(), "local search round");

            if !improved {
                break;
            }

            if let Some(limit) = self.round_limit {
                if round >= limit {
                    warn!(limit, optimum = incumbent.fitness(), "local search hit round limit");
                    break;
                }
            }
        }

        incumbent.into_solution()
    }

    fn title(&self) -> &str {
        "Local Search"
    }
}
