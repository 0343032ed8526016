pub mod error;
pub mod function;
pub mod rng;
pub mod search;
pub mod selection;
pub mod variation;

// Re-export commonly used types for convenience
pub use error::{OptionExt, Result, SearchError};
pub use function::ObjectiveFunction;
pub use search::{RecursiveLauncher, RecursiveLauncherBuilder, SearchOptions, SearchOutcome};
pub use selection::SelectionStrategy;
pub use variation::Vector;
