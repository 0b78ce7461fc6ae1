use std::time::{Duration, Instant};

use crate::maze::{Cell, Grid};

use super::{error::SearchError, state::SearchState, state::SearchStatus};

/// The expansion policy plugged into a [`Runner`](super::Runner).
///
/// The runner owns the provenance map; the strategy owns its frontier and decides
/// which cell comes next.
pub trait Strategy {
    fn name(&self) -> &'static str;

    /// goal-directed strategies refuse to start on a grid without a goal
    fn requires_goal(&self) -> bool {
        false
    }

    /// drops any frontier left over from a previous search
    fn clear(&mut self);

    /// seeds the frontier; the start is already in the provenance map
    fn begin(&mut self, grid: &Grid, state: &mut SearchState);

    /// Dequeues and expands one cell, returning it.
    ///
    /// Calls [`SearchState::finish_found`] when the dequeued cell is the goal, and
    /// returns `None` once nothing is left to expand.
    fn step(&mut self, grid: &Grid, state: &mut SearchState) -> Option<Cell>;
}

/// Object-safe face of a runner, so different strategies can sit side by side.
pub trait SearchRunner {
    fn name(&self) -> &'static str;

    fn reset(&mut self);

    /// Starts a fresh search and returns its lazy visitation trace.
    ///
    /// # Errors
    ///
    /// [`SearchError::MissingGoal`] when a goal-directed runner gets a grid without a
    /// goal. Nothing is explored in that case.
    fn search<'a>(
        &'a mut self,
        grid: &'a Grid,
    ) -> Result<Box<dyn Iterator<Item = Cell> + 'a>, SearchError>;

    /// the path found by the last search, start to goal
    fn path(&self) -> Option<&[Cell]>;

    fn status(&self) -> SearchStatus;

    /// cells yielded by the current or last search
    fn visited(&self) -> usize;

    /// Runs a whole search. `Ok(None)` means the goal is unreachable.
    fn solve(&mut self, grid: &Grid) -> Result<Option<Vec<Cell>>, SearchError> {
        self.search(grid)?.for_each(drop);
        Ok(self.path().map(<[Cell]>::to_vec))
    }
}

pub struct SearchReport {
    pub visited: usize,
    pub path_length: Option<usize>,
    pub elapsed: Duration,
}

impl SearchReport {
    /// solves `grid` with `runner` and times it
    pub fn measure(runner: &mut dyn SearchRunner, grid: &Grid) -> Result<Self, SearchError> {
        let started = Instant::now();
        let path = runner.solve(grid)?;
        let elapsed = started.elapsed();

        Ok(Self {
            visited: runner.visited(),
            path_length: path.map(|p| p.len()),
            elapsed,
        })
    }
}
