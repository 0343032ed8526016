//! # SearchOptions
//!
//! The `SearchOptions` struct holds the run-wide constants of a recursive search:
//! the length of every vector, the mutation rate and the population size from which
//! sub-solutions are built in parallel.
//!
//! ## Example
//!
//! ```rust
//! use recsel::search::SearchOptions;
//!
//! // Create a new SearchOptions instance with custom parameters
//! let custom_options = SearchOptions::new(30, 0.05);
//!
//! // Create a new SearchOptions instance with default parameters
//! let default_options = SearchOptions::default();
//! assert_eq!(default_options.get_input_size(), 100);
//! ```

use crate::{
    error::{Result, SearchError},
    variation::{Variation, DEFAULT_MUTATION_RATE},
};

/// Default vector length.
pub const DEFAULT_INPUT_SIZE: usize = 100;

/// Default population size from which one level is built in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    input_size: usize,
    mutation_rate: f64,
    /// Minimum population size to build sub-solutions in parallel
    parallel_threshold: usize,
}

impl SearchOptions {
    pub fn new(input_size: usize, mutation_rate: f64) -> Self {
        Self {
            input_size,
            mutation_rate,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Creates a new `SearchOptions` instance with all parameters specified.
    ///
    /// # Arguments
    ///
    /// * `input_size` - The length of every vector in the run.
    /// * `mutation_rate` - The probability of perturbing one component.
    /// * `parallel_threshold` - The minimum population size to build in parallel.
    pub fn new_with_threshold(
        input_size: usize,
        mutation_rate: f64,
        parallel_threshold: usize,
    ) -> Self {
        Self {
            input_size,
            mutation_rate,
            parallel_threshold,
        }
    }

    pub fn get_input_size(&self) -> usize {
        self.input_size
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Returns the minimum population size to build sub-solutions in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_input_size(&mut self, input_size: usize) {
        self.input_size = input_size;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Checks the options and derives the variation operators from them.
    ///
    /// # Errors
    ///
    /// Returns an error if the input size is zero or the mutation rate is not
    /// within `[0, 1]`.
    pub fn validate(&self) -> Result<Variation> {
        if self.input_size == 0 {
            return Err(SearchError::Configuration(
                "Input size cannot be zero".to_string(),
            ));
        }

        Variation::new(self.mutation_rate)
    }

    /// Returns a builder for creating a `SearchOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recsel::search::SearchOptions;
    ///
    /// let options = SearchOptions::builder()
    ///     .input_size(10)
    ///     .mutation_rate(0.02)
    ///     .parallel_threshold(8)
    ///     .build();
    ///
    /// assert_eq!(options.get_parallel_threshold(), 8);
    /// ```
    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::default()
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            input_size: DEFAULT_INPUT_SIZE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `SearchOptions`.
#[derive(Debug, Clone, Default)]
pub struct SearchOptionsBuilder {
    input_size: Option<usize>,
    mutation_rate: Option<f64>,
    parallel_threshold: Option<usize>,
}

impl SearchOptionsBuilder {
    pub fn input_size(mut self, value: usize) -> Self {
        self.input_size = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn build(self) -> SearchOptions {
        SearchOptions {
            input_size: self.input_size.unwrap_or(DEFAULT_INPUT_SIZE),
            mutation_rate: self.mutation_rate.unwrap_or(DEFAULT_MUTATION_RATE),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
        }
    }
}
