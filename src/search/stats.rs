use std::sync::atomic::{AtomicU64, Ordering};

/// Counters observed during one search.
///
/// Increments are atomic so sub-solutions built on different rayon workers add up
/// to the same totals a sequential run would report.
#[derive(Debug, Default)]
pub struct SearchStats {
    evaluations: AtomicU64,
    solutions: AtomicU64,
    leaves: AtomicU64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Children scored by a selection strategy.
    pub fn evaluations(&self) -> u64 {
        self.evaluations.load(Ordering::Relaxed)
    }

    /// Invocations of the recursive builder, leaves included.
    pub fn solutions(&self) -> u64 {
        self.solutions.load(Ordering::Relaxed)
    }

    /// Randomly sampled depth-0 vectors.
    pub fn leaves(&self) -> u64 {
        self.leaves.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.evaluations.store(0, Ordering::Relaxed);
        self.solutions.store(0, Ordering::Relaxed);
        self.leaves.store(0, Ordering::Relaxed);
    }

    pub(crate) fn record_evaluation(&self) {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_solution(&self) {
        self.solutions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_leaf(&self) {
        self.leaves.fetch_add(1, Ordering::Relaxed);
    }
}
