use rayon::prelude::*;
use tracing::{info, trace};

use super::{options::SearchOptions, stats::SearchStats};
use crate::{
    error::{Result, SearchError},
    function::ObjectiveFunction,
    rng::RandomNumberGenerator,
    selection::SelectionStrategy,
    variation::{Variation, Vector},
};

/// Represents the result of one recursive search, together with its counters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// The best vector found.
    pub solution: Vector,
    /// The fitness of `solution`.
    pub fitness: f64,
    /// The number of children scored by the selection strategy.
    pub evaluations: u64,
    /// The number of builder invocations, leaves included.
    pub solutions: u64,
    /// The number of randomly sampled depth-0 vectors.
    pub leaves: u64,
}

/// Builds solutions by recursive population generation.
///
/// A solution at depth `d > 0` is the vector the selection strategy picks from a
/// population of `size` solutions at depth `d - 1`. A solution at depth 0 is a
/// uniformly random vector within the objective function's bounds. Sub-solutions
/// are never cached: every call draws fresh randomness.
#[derive(Debug, Clone)]
pub struct RecursiveLauncher<S, F>
where
    S: SelectionStrategy,
    F: ObjectiveFunction,
{
    selection: S,
    function: F,
    options: SearchOptions,
    variation: Variation,
}

impl<S, F> RecursiveLauncher<S, F>
where
    S: SelectionStrategy,
    F: ObjectiveFunction,
{
    /// Creates a new `RecursiveLauncher` instance.
    ///
    /// # Arguments
    ///
    /// * `selection` - The strategy reducing each population to one vector.
    /// * `function` - The objective function being minimized.
    /// * `options` - Run-wide constants.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` do not validate.
    pub fn new(selection: S, function: F, options: SearchOptions) -> Result<Self> {
        let variation = options.validate()?;

        Ok(Self {
            selection,
            function,
            options,
            variation,
        })
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    pub fn function(&self) -> &F {
        &self.function
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Builds one solution of the given recursion depth.
    ///
    /// Every builder invocation, leaf and scored child is recorded in `stats`. The
    /// counters are not reset here, so one `stats` can accumulate several calls.
    ///
    /// # Arguments
    ///
    /// * `depth` - Number of nested population levels. At 0 `size` is ignored.
    /// * `size` - Population size at every level.
    /// * `rng` - The random source for sampling, crossover and mutation.
    /// * `stats` - Counters to record into.
    ///
    /// # Errors
    ///
    /// Returns an error if `depth > 0` and `size` is zero, or if selection fails.
    ///
    /// # Performance
    ///
    /// The work grows as `size^depth` leaves. When `size` reaches the parallel
    /// threshold, the sub-solutions of a level are built on rayon workers, each
    /// with a generator seeded from `rng`.
    pub fn solution(
        &self,
        depth: usize,
        size: usize,
        rng: &mut RandomNumberGenerator,
        stats: &SearchStats,
    ) -> Result<Vector> {
        if depth > 0 && size == 0 {
            return Err(SearchError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        self.build(depth, size, rng, stats)
    }

    /// Builds one solution on fresh counters and reports the outcome.
    ///
    /// # Errors
    ///
    /// Same conditions as [`solution`](Self::solution).
    pub fn run(
        &self,
        depth: usize,
        size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<SearchOutcome> {
        info!(
            function = self.function.title(),
            selection = self.selection.title(),
            depth,
            size,
            "search started"
        );

        let stats = SearchStats::new();
        let solution = self.solution(depth, size, rng, &stats)?;
        let fitness = self.function.calculate(&solution);

        info!(
            function = self.function.title(),
            evaluations = stats.evaluations(),
            fitness,
            "search finished"
        );

        Ok(SearchOutcome {
            solution,
            fitness,
            evaluations: stats.evaluations(),
            solutions: stats.solutions(),
            leaves: stats.leaves(),
        })
    }

    fn build(
        &self,
        depth: usize,
        size: usize,
        rng: &mut RandomNumberGenerator,
        stats: &SearchStats,
    ) -> Result<Vector> {
        stats.record_solution();

        if depth == 0 {
            stats.record_leaf();
            return Ok(self.sample(rng));
        }

        let population = if size >= self.options.get_parallel_threshold() {
            let seeds: Vec<u64> = (0..size).map(|_| rng.next_seed()).collect();
            seeds
                .into_par_iter()
                .map(|seed| {
                    let mut local = RandomNumberGenerator::from_seed(seed);
                    self.build(depth - 1, size, &mut local, stats)
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            (0..size)
                .map(|_| self.build(depth - 1, size, rng, stats))
                .collect::<Result<Vec<_>>>()?
        };

        let best = self
            .selection
            .best(&population, &self.function, &self.variation, rng, stats)?;
        trace!(depth, size, "level complete");

        Ok(best)
    }

    /// Uniform vector within the function's bounds.
    fn sample(&self, rng: &mut RandomNumberGenerator) -> Vector {
        let minimum = self.function.minimum();
        let maximum = self.function.maximum();

        (0..self.options.get_input_size())
            .map(|_| minimum + rng.next_f64() * (maximum - minimum))
            .collect()
    }
}
