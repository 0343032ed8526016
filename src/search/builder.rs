use crate::{
    error::{Result, SearchError},
    function::ObjectiveFunction,
    selection::SelectionStrategy,
};

use super::{RecursiveLauncher, SearchOptions};

/// Fluent construction of a [`RecursiveLauncher`].
///
/// Options fall back to [`SearchOptions::default`] when not given.
#[derive(Debug, Clone)]
pub struct RecursiveLauncherBuilder<S, F>
where
    S: SelectionStrategy,
    F: ObjectiveFunction,
{
    selection: Option<S>,
    function: Option<F>,
    options: Option<SearchOptions>,
}

impl<S, F> RecursiveLauncherBuilder<S, F>
where
    S: SelectionStrategy,
    F: ObjectiveFunction,
{
    pub fn new() -> Self {
        Self {
            selection: None,
            function: None,
            options: None,
        }
    }

    pub fn with_selection(mut self, selection: S) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_function(mut self, function: F) -> Self {
        self.function = Some(function);
        self
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn build(self) -> Result<RecursiveLauncher<S, F>> {
        let selection = self.selection.ok_or_else(|| {
            SearchError::Configuration("Selection strategy not specified".to_string())
        })?;

        let function = self.function.ok_or_else(|| {
            SearchError::Configuration("Objective function not specified".to_string())
        })?;

        RecursiveLauncher::new(selection, function, self.options.unwrap_or_default())
    }
}

impl<S, F> Default for RecursiveLauncherBuilder<S, F>
where
    S: SelectionStrategy,
    F: ObjectiveFunction,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{function::Ackley, selection::ExhaustivePairwise};

    #[test]
    fn test_build() {
        let launcher = RecursiveLauncherBuilder::new()
            .with_selection(ExhaustivePairwise)
            .with_function(Ackley)
            .build()
            .unwrap();

        assert_eq!(launcher.options(), &SearchOptions::default());
        assert_eq!(launcher.function().title(), "Ackley");
    }

    #[test]
    fn test_missing_parts() {
        let result = RecursiveLauncherBuilder::<ExhaustivePairwise, Ackley>::new()
            .with_function(Ackley)
            .build();

        match result {
            Err(SearchError::Configuration(msg)) => {
                assert!(msg.contains("Selection strategy not specified"))
            }
            _ => panic!("Expected Configuration error"),
        }

        let result = RecursiveLauncherBuilder::<ExhaustivePairwise, Ackley>::new()
            .with_selection(ExhaustivePairwise)
            .build();
        assert!(result.is_err());
    }
}
