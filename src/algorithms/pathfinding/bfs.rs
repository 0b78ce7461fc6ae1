use crate::maze::{Cell, Grid};

use super::{
    frontier::{FifoFrontier, Frontier},
    state::SearchState,
    traits::Strategy,
};

/// Breadth-first search; the first arrival at a cell is along a shortest route.
#[derive(Debug, Default)]
pub struct BreadthFirst {
    frontier: FifoFrontier,
}

impl Strategy for BreadthFirst {
    fn name(&self) -> &'static str {
        "Breadth-First"
    }

    fn clear(&mut self) {
        self.frontier.clear();
    }

    fn begin(&mut self, grid: &Grid, _state: &mut SearchState) {
        self.frontier.push(grid.start(), 0.0);
    }

    fn step(&mut self, grid: &Grid, state: &mut SearchState) -> Option<Cell> {
        let current = self.frontier.pop()?;

        if grid.goal() == Some(current) {
            state.finish_found(current);
            return Some(current);
        }

        for neighbor in grid.neighbors(current) {
            if state.record(neighbor, current) {
                self.frontier.push(neighbor, 0.0);
            }
        }

        Some(current)
    }
}
