use std::collections::{HashMap, HashSet};

use crate::maze::{Cell, Grid};

use super::{
    frontier::{Frontier, PriorityFrontier},
    heuristic::Heuristic,
    state::SearchState,
    traits::Strategy,
};

/// A* over unit-cost moves, ranked by cost so far plus the heuristic.
///
/// A neighbor is re-parented only when the new route to it is strictly cheaper.
/// Costs are cached per cell instead of being recounted along the provenance chain.
#[derive(Debug, Default)]
pub struct AStar {
    heuristic: Heuristic,
    frontier: PriorityFrontier,
    cost: HashMap<Cell, usize>,
    expanded: HashSet<Cell>,
}

impl AStar {
    pub fn new() -> Self {
        Self::default()
    }

    /// A* with the collinearity tie-break; see [`TIEBREAK_WEIGHT`](super::TIEBREAK_WEIGHT)
    pub fn tiebreak() -> Self {
        Self {
            heuristic: Heuristic::Tiebreak,
            ..Self::default()
        }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// cost of the best known route from the start
    pub fn cost(&self, cell: Cell) -> Option<usize> {
        self.cost.get(&cell).copied()
    }
}

impl Strategy for AStar {
    fn name(&self) -> &'static str {
        match self.heuristic {
            Heuristic::Manhattan => "A*",
            Heuristic::Tiebreak => "A* (tie-break)",
        }
    }

    fn requires_goal(&self) -> bool {
        true
    }

    fn clear(&mut self) {
        self.frontier.clear();
        self.cost.clear();
        self.expanded.clear();
    }

    fn begin(&mut self, grid: &Grid, _state: &mut SearchState) {
        let start = grid.start();
        self.cost.insert(start, 0);
        self.frontier.push(
            start,
            self.heuristic.estimate(start, start, grid.goal()),
        );
    }

    fn step(&mut self, grid: &Grid, state: &mut SearchState) -> Option<Cell> {
        // entries left behind by a cheaper re-push are stale
        let current = loop {
            let cell = self.frontier.pop()?;
            if self.expanded.insert(cell) {
                break cell;
            }
        };

        if grid.goal() == Some(current) {
            state.finish_found(current);
            return Some(current);
        }

        let tentative = self.cost.get(&current).copied().unwrap_or_default() + 1;
        for neighbor in grid.neighbors(current) {
            let known = self.cost.get(&neighbor).copied().unwrap_or(usize::MAX);
            if tentative >= known {
                continue;
            }

            state.reparent(neighbor, current);
            self.cost.insert(neighbor, tentative);
            self.expanded.remove(&neighbor);

            let priority =
                tentative as f64 + self.heuristic.estimate(neighbor, grid.start(), grid.goal());
            self.frontier.push(neighbor, priority);
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::pathfinding::{Runner, SearchError, SearchRunner};
    use crate::maze::parse;

    use super::*;

    #[test]
    fn finds_the_short_way_round() {
        // the opening straight towards the goal is a dead end
        let grid = parse("0,0\n0,4\n  +  \n  +  \n     \n").unwrap();
        let mut runner = Runner::new(AStar::new());

        let path = runner.solve(&grid).unwrap().unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.first(), Some(&Cell::new(0, 0)));
        assert_eq!(path.last(), Some(&Cell::new(0, 4)));
        assert_eq!(runner.strategy().cost(Cell::new(0, 4)), Some(8));
    }

    #[test]
    fn tiebreak_hugs_the_diagonal() {
        let grid = parse("0,0\n3,3\n    \n    \n    \n    \n").unwrap();

        let mut plain = Runner::new(AStar::new());
        let mut tiebreak = Runner::new(AStar::tiebreak());
        let plain_path = plain.solve(&grid).unwrap().unwrap();
        let tiebreak_path = tiebreak.solve(&grid).unwrap().unwrap();

        assert_eq!(plain_path.len(), 7);
        assert_eq!(tiebreak_path.len(), 7);
        assert_eq!(plain.visited(), 16);
        assert_eq!(tiebreak.visited(), 9);
        assert!(tiebreak_path.contains(&Cell::new(1, 1)));
        assert!(tiebreak_path.contains(&Cell::new(2, 2)));
        assert_eq!(tiebreak.name(), "A* (tie-break)");
    }

    #[test]
    fn refuses_to_start_without_goal() {
        let grid = parse("0,0\n\n \n").unwrap();
        let mut runner = Runner::new(AStar::tiebreak());

        assert!(matches!(
            runner.search(&grid),
            Err(SearchError::MissingGoal { .. })
        ));
    }
}
