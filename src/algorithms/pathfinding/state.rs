use std::collections::HashMap;

use crate::maze::Cell;

/// Where a runner stands between searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchStatus {
    /// never searched, or reset since
    #[default]
    Idle,
    Running,
    /// the goal was reached and the path is available
    Found,
    /// the frontier emptied without reaching the goal
    Exhausted,
}

impl SearchStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted)
    }
}

/// Provenance map, path and status shared by every strategy.
///
/// A cell is in the provenance map once it has been discovered. The start maps to
/// `None`.
#[derive(Debug, Default)]
pub struct SearchState {
    came_from: HashMap<Cell, Option<Cell>>,
    path: Vec<Cell>,
    status: SearchStatus,
    visited: usize,
}

impl SearchState {
    pub fn reset(&mut self) {
        self.came_from.clear();
        self.path.clear();
        self.status = SearchStatus::Idle;
        self.visited = 0;
    }

    pub(crate) fn begin(&mut self, start: Cell) {
        self.reset();
        self.came_from.insert(start, None);
        self.status = SearchStatus::Running;
    }

    /// Records `cell` as discovered from `from` unless it is already known.
    ///
    /// Returns whether the cell was new.
    pub fn record(&mut self, cell: Cell, from: Cell) -> bool {
        if self.came_from.contains_key(&cell) {
            return false;
        }
        self.came_from.insert(cell, Some(from));
        true
    }

    /// Overwrites the predecessor of `cell`; only cost-aware strategies call this.
    pub fn reparent(&mut self, cell: Cell, from: Cell) {
        self.came_from.insert(cell, Some(from));
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.came_from.contains_key(&cell)
    }

    pub fn predecessor(&self, cell: Cell) -> Option<Cell> {
        self.came_from.get(&cell).copied().flatten()
    }

    pub fn discovered(&self) -> usize {
        self.came_from.len()
    }

    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn visited(&self) -> usize {
        self.visited
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited += 1;
    }

    pub fn path(&self) -> Option<&[Cell]> {
        self.is_found().then_some(self.path.as_slice())
    }

    pub(crate) fn finish_found(&mut self, goal: Cell) {
        self.path = self.reconstruct(goal);
        self.status = SearchStatus::Found;
    }

    pub(crate) fn finish_exhausted(&mut self) {
        self.path.clear();
        self.status = SearchStatus::Exhausted;
    }

    /// walks the provenance map back from `cell` to the start
    fn reconstruct(&self, cell: Cell) -> Vec<Cell> {
        let mut path = vec![cell];
        let mut current = cell;

        while let Some(prev) = self.predecessor(current) {
            path.push(prev);
            current = prev;
            debug_assert!(path.len() <= self.came_from.len(), "provenance cycle");
        }

        path.reverse();
        path
    }
}
