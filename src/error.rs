//! # Error Types
//!
//! This module defines the error type shared by every stage of the recursive
//! search: option validation, variation operators, selection and the launcher.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use recsel::error::{Result, SearchError};
//!
//! fn check_size(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(SearchError::Configuration("Population size cannot be zero".to_string()));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(check_size(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use recsel::error::{OptionExt, SearchError};
//!
//! fn first_candidate(candidates: &[f64]) -> recsel::error::Result<f64> {
//!     candidates.first().cloned().ok_or_else_search(|| SearchError::EmptyPopulation)
//! }
//!
//! assert!(first_candidate(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while searching.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Error that occurs when an invalid configuration or argument is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a selection strategy receives no individuals.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when two parents of different length are combined.
    #[error("Dimension mismatch: first parent has {first} components, second has {second}")]
    DimensionMismatch { first: usize, second: usize },

    /// Error that occurs when no candidate produced a usable fitness value.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),
}

/// A specialized Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, SearchError>` using
    /// a closure to generate the error.
    fn ok_or_else_search<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SearchError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_search<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SearchError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SearchError::DimensionMismatch {
            first: 3,
            second: 4,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: first parent has 3 components, second has 4"
        );

        let err = SearchError::Configuration("Population size cannot be zero".to_string());
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_option_ext() {
        let some: Option<u8> = Some(7);
        assert_eq!(some.ok_or_else_search(|| SearchError::EmptyPopulation), Ok(7));

        let none: Option<u8> = None;
        assert_eq!(
            none.ok_or_else_search(|| SearchError::EmptyPopulation),
            Err(SearchError::EmptyPopulation)
        );
    }
}
