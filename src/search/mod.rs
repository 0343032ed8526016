pub mod builder;
pub mod launcher;
pub mod options;
pub mod stats;

pub use builder::RecursiveLauncherBuilder;
pub use launcher::{RecursiveLauncher, SearchOutcome};
pub use options::{SearchOptions, SearchOptionsBuilder};
pub use stats::SearchStats;
