//! # ObjectiveFunction Trait
//!
//! The `ObjectiveFunction` trait defines the interface for benchmark landscapes
//! the recursive search minimizes. A landscape maps a vector to a scalar fitness
//! and declares the interval every component of a freshly sampled vector is drawn
//! from.
//!
//! Implementations must accept any vector length of one or more, and must not
//! assume a vector respects the bounds: mutation can move components outside of
//! them.
//!
//! ## Example
//!
//! ```rust
//! use recsel::function::{ObjectiveFunction, Rastrigin};
//!
//! let rastrigin = Rastrigin;
//! assert_eq!(rastrigin.calculate(&[0.0, 0.0, 0.0]), 0.0);
//! assert_eq!(rastrigin.title(), "Rastrigin");
//! ```
//!
//! ## Implementing the Trait
//!
//! ```rust
//! use recsel::function::ObjectiveFunction;
//!
//! #[derive(Debug)]
//! struct Sphere;
//!
//! impl ObjectiveFunction for Sphere {
//!     fn calculate(&self, input: &[f64]) -> f64 {
//!         input.iter().map(|x| x * x).sum()
//!     }
//!
//!     fn minimum(&self) -> f64 {
//!         -5.0
//!     }
//!
//!     fn maximum(&self) -> f64 {
//!         5.0
//!     }
//!
//!     fn title(&self) -> &str {
//!         "Sphere"
//!     }
//! }
//! ```

pub mod ackley;
pub mod griewank;
pub mod michalewicz;
pub mod norwegian;
pub mod rastrigin;
pub mod schwefel;

use std::fmt::Debug;

pub use ackley::Ackley;
pub use griewank::Griewank;
pub use michalewicz::Michalewicz;
pub use norwegian::Norwegian;
pub use rastrigin::Rastrigin;
pub use schwefel::Schwefel;

/// Trait for benchmark functions minimized by the search.
///
/// Types implementing this trait must be `Send` and `Sync` so that sub-solutions
/// can be built in parallel against the same function.
pub trait ObjectiveFunction: Debug + Send + Sync {
    /// Calculates the fitness of the input vector. Lower is better.
    fn calculate(&self, input: &[f64]) -> f64;

    /// Lower bound of the sampling interval for every component.
    fn minimum(&self) -> f64;

    /// Upper bound of the sampling interval for every component.
    fn maximum(&self) -> f64;

    /// Display name.
    fn title(&self) -> &str;
}

impl<T: ObjectiveFunction + ?Sized> ObjectiveFunction for Box<T> {
    fn calculate(&self, input: &[f64]) -> f64 {
        (**self).calculate(input)
    }

    fn minimum(&self) -> f64 {
        (**self).minimum()
    }

    fn maximum(&self) -> f64 {
        (**self).maximum()
    }

    fn title(&self) -> &str {
        (**self).title()
    }
}

impl<T: ObjectiveFunction + ?Sized> ObjectiveFunction for &T {
    fn calculate(&self, input: &[f64]) -> f64 {
        (**self).calculate(input)
    }

    fn minimum(&self) -> f64 {
        (**self).minimum()
    }

    fn maximum(&self) -> f64 {
        (**self).maximum()
    }

    fn title(&self) -> &str {
        (**self).title()
    }
}

/// Returns every built-in landscape.
pub fn all() -> Vec<Box<dyn ObjectiveFunction>> {
    vec![
        Box::new(Ackley),
        Box::new(Griewank),
        Box::new(Michalewicz),
        Box::new(Norwegian),
        Box::new(Rastrigin),
        Box::new(Schwefel),
    ]
}

/// Looks up a built-in landscape by its title, ignoring case.
pub fn by_title(title: &str) -> Option<Box<dyn ObjectiveFunction>> {
    all()
        .into_iter()
        .find(|function| function.title().eq_ignore_ascii_case(title))
}
