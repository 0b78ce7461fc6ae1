use crate::maze::{Cell, Grid};

use super::{state::SearchState, traits::Strategy};

/// one level of the descent: a cell and the neighbors it still has to try
#[derive(Debug)]
struct Frame {
    cell: Cell,
    neighbors: Vec<Cell>,
    next: usize,
}

/// Recursive depth-first descent, unrolled into an explicit call stack.
///
/// Neighbors are tried in ascending `row + 10 * col` order, so columns to the west
/// come first. Finding a path says nothing about its length.
#[derive(Debug, Default)]
pub struct RecursiveDepthFirst {
    stack: Vec<Frame>,
    pending: Option<Cell>,
}

impl RecursiveDepthFirst {
    fn sort_key(cell: &Cell) -> usize {
        cell.row + cell.col * 10
    }

    /// the body of one recursive call, up to its first child
    fn enter(&mut self, cell: Cell, grid: &Grid, state: &mut SearchState) -> Cell {
        if grid.goal() == Some(cell) {
            state.finish_found(cell);
            self.stack.clear();
            return cell;
        }

        let mut neighbors = grid.neighbors(cell);
        neighbors.sort_by_key(Self::sort_key);
        self.stack.push(Frame {
            cell,
            neighbors,
            next: 0,
        });

        cell
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Strategy for RecursiveDepthFirst {
    fn name(&self) -> &'static str {
        "Recursive Depth-First"
    }

    fn clear(&mut self) {
        self.stack.clear();
        self.pending = None;
    }

    fn begin(&mut self, grid: &Grid, _state: &mut SearchState) {
        self.pending = Some(grid.start());
    }

    fn step(&mut self, grid: &Grid, state: &mut SearchState) -> Option<Cell> {
        // every pending branch dies once the goal is found
        if state.is_found() {
            return None;
        }

        if let Some(cell) = self.pending.take() {
            return Some(self.enter(cell, grid, state));
        }

        while let Some(frame) = self.stack.last_mut() {
            let Some(&next) = frame.neighbors.get(frame.next) else {
                self.stack.pop();
                continue;
            };
            frame.next += 1;

            let parent = frame.cell;
            if state.record(next, parent) {
                return Some(self.enter(next, grid, state));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::pathfinding::{Runner, SearchRunner, SearchStatus};
    use crate::maze::parse;

    use super::*;

    #[test]
    fn prefers_western_columns_then_rows() {
        let grid = parse("0,0\n2,2\n   \n   \n   \n").unwrap();
        let mut runner = Runner::new(RecursiveDepthFirst::default());

        let trace: Vec<_> = runner.search(&grid).unwrap().collect();
        assert_eq!(
            trace,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(1, 1),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(2, 2)
            ]
        );
        assert_eq!(runner.path().map(<[Cell]>::len), Some(9));
        assert_eq!(runner.strategy().depth(), 0);
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        let grid = parse("1,1\n1,2\n+++\n   \n+++\n").unwrap();
        let mut runner = Runner::new(RecursiveDepthFirst::default());

        let trace: Vec<_> = runner.search(&grid).unwrap().collect();
        assert_eq!(trace, vec![Cell::new(1, 1), Cell::new(1, 0), Cell::new(1, 2)]);
        assert_eq!(
            runner.path(),
            Some(&[Cell::new(1, 1), Cell::new(1, 2)][..])
        );
    }

    #[test]
    fn wanders_before_an_adjacent_goal() {
        let grid = parse("0,1\n0,2\n   \n   \n").unwrap();
        let mut runner = Runner::new(RecursiveDepthFirst::default());

        let trace: Vec<_> = runner.search(&grid).unwrap().collect();
        assert_eq!(
            trace,
            vec![
                Cell::new(0, 1),
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(1, 2),
                Cell::new(0, 2)
            ]
        );
        assert_eq!(
            runner.path(),
            Some(
                &[
                    Cell::new(0, 1),
                    Cell::new(0, 0),
                    Cell::new(1, 0),
                    Cell::new(1, 1),
                    Cell::new(1, 2),
                    Cell::new(0, 2)
                ][..]
            )
        );
    }

    #[test]
    fn no_goal_visits_everything_reachable() {
        let grid = parse("0,0\n-\n  +\n+  \n").unwrap();
        let mut runner = Runner::new(RecursiveDepthFirst::default());

        let trace: Vec<_> = runner.search(&grid).unwrap().collect();
        assert_eq!(
            trace,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1), Cell::new(1, 2)]
        );
        assert_eq!(runner.status(), SearchStatus::Exhausted);
    }
}
