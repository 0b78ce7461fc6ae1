use crate::maze::{Cell, Grid};

use super::{
    frontier::{Frontier, PriorityFrontier},
    heuristic::Heuristic,
    state::SearchState,
    traits::Strategy,
};

/// Greedy best-first search: always expands the cell that looks closest to the goal,
/// ignoring how far it is from the start.
#[derive(Debug, Default)]
pub struct GreedyBestFirst {
    frontier: PriorityFrontier,
}

impl Strategy for GreedyBestFirst {
    fn name(&self) -> &'static str {
        "Greedy Best-First"
    }

    fn requires_goal(&self) -> bool {
        true
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
                let priority = Heuristic::Manhattan.estimate(neighbor, grid.start(), grid.goal());
                self.frontier.push(neighbor, priority);
            }
        }

        Some(current)
    }
}
