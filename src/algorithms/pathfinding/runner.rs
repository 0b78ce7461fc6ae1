use std::iter::FusedIterator;

use crate::maze::{Cell, Grid};

use super::{
    error::SearchError,
    state::{SearchState, SearchStatus},
    traits::{SearchRunner, Strategy},
};

/// One search strategy plus the state it fills in.
#[derive(Debug, Default)]
pub struct Runner<S: Strategy> {
    strategy: S,
    state: SearchState,
}

impl<S: Strategy> Runner<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            state: SearchState::default(),
        }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Resets the runner and returns an iterator over the cells it expands.
    ///
    /// # Errors
    ///
    /// [`SearchError::MissingGoal`] for goal-directed strategies on a grid without a
    /// goal. The runner is left untouched.
    pub fn search<'a>(&'a mut self, grid: &'a Grid) -> Result<Search<'a, S>, SearchError> {
        if self.strategy.requires_goal() && grid.goal().is_none() {
            return Err(SearchError::MissingGoal {
                algorithm: self.strategy.name(),
            });
        }

        self.strategy.clear();
        self.state.begin(grid.start());
        self.strategy.begin(grid, &mut self.state);

        log::debug!(
            "{}: searching from {} to {}",
            self.strategy.name(),
            grid.start(),
            grid.goal()
                .map_or_else(|| "anywhere".to_string(), |g| g.to_string())
        );

        Ok(Search { runner: self, grid })
    }
}

impl<S: Strategy> SearchRunner for Runner<S> {
    fn name(&self) -> &'static str {
        self.strategy.name()
    }

    fn reset(&mut self) {
        self.strategy.clear();
        self.state.reset();
    }

    fn search<'a>(
        &'a mut self,
        grid: &'a Grid,
    ) -> Result<Box<dyn Iterator<Item = Cell> + 'a>, SearchError> {
        Ok(Box::new(Runner::search(self, grid)?))
    }

    fn path(&self) -> Option<&[Cell]> {
        self.state.path()
    }

    fn status(&self) -> SearchStatus {
        self.state.status()
    }

    fn visited(&self) -> usize {
        self.state.visited()
    }
}

/// Lazy visitation trace of one search.
///
/// Each item is the cell the strategy just dequeued. Dropping the iterator early
/// leaves the runner `Running` with a consistent provenance map.
pub struct Search<'a, S: Strategy> {
    runner: &'a mut Runner<S>,
    grid: &'a Grid,
}

impl<S: Strategy> Search<'_, S> {
    pub fn status(&self) -> SearchStatus {
        self.runner.state.status()
    }
}

impl<S: Strategy> Iterator for Search<'_, S> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let runner = &mut *self.runner;
        if runner.state.status() != SearchStatus::Running {
            return None;
        }

        match runner.strategy.step(self.grid, &mut runner.state) {
            Some(cell) => {
                runner.state.mark_visited();
                log::trace!("{}: visit {}", runner.strategy.name(), cell);

                if runner.state.is_found() {
                    log::debug!(
                        "{}: reached goal after {} visits, path of {} cells",
                        runner.strategy.name(),
                        runner.state.visited(),
                        runner.state.path().map_or(0, <[Cell]>::len)
                    );
                }

                Some(cell)
            }
            None => {
                runner.state.finish_exhausted();
                log::debug!(
                    "{}: frontier exhausted after {} visits, no path",
                    runner.strategy.name(),
                    runner.state.visited()
                );
                None
            }
        }
    }
}

impl<S: Strategy> FusedIterator for Search<'_, S> {}
