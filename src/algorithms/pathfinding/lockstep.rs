use std::collections::HashMap;

use crate::maze::{Cell, Grid};

use super::{error::SearchError, traits::SearchRunner};

/// Several searches over one grid, advanced one visit at a time together.
///
/// Keeps, for every visited cell, the indices of the runners that visited it.
pub struct Lockstep<'a> {
    runs: Vec<(usize, Box<dyn Iterator<Item = Cell> + 'a>)>,
    visits: HashMap<Cell, Vec<usize>>,
    ticks: usize,
}

impl<'a> Lockstep<'a> {
    /// Starts a search on every runner.
    ///
    /// # Errors
    ///
    /// Fails before any runner moves if one of them cannot search `grid`.
    pub fn new(
        runners: &'a mut [Box<dyn SearchRunner>],
        grid: &'a Grid,
    ) -> Result<Self, SearchError> {
        if grid.goal().is_none() {
            log::debug!("lockstep over a grid without goal");
        }

        let runs = runners
            .iter_mut()
            .enumerate()
            .map(|(idx, runner)| runner.search(grid).map(|run| (idx, run)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            runs,
            visits: HashMap::new(),
            ticks: 0,
        })
    }

    /// Advances every unfinished search by one visit; returns how many moved.
    pub fn step(&mut self) -> usize {
        let visits = &mut self.visits;
        let mut advanced = 0;

        self.runs.retain_mut(|(idx, run)| match run.next() {
            Some(cell) => {
                visits.entry(cell).or_default().push(*idx);
                advanced += 1;
                true
            }
            None => false,
        });

        if advanced > 0 {
            self.ticks += 1;
        }
        advanced
    }

    /// Steps until every search ends or `budget` ticks have passed.
    pub fn run(&mut self, budget: Option<usize>) -> usize {
        while !self.is_finished() && budget.is_none_or(|max| self.ticks < max) {
            self.step();
        }
        self.ticks
    }

    pub fn is_finished(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn visits(&self) -> &HashMap<Cell, Vec<usize>> {
        &self.visits
    }

    pub fn visitors(&self, cell: Cell) -> &[usize] {
        self.visits.get(&cell).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::pathfinding::{Algorithm, SearchStatus};
    use crate::maze::parse;

    use super::*;

    #[test]
    fn runners_advance_together() {
        let grid = parse("0,0\n0,2\n   \n   \n").unwrap();
        let mut runners = vec![
            Algorithm::BreadthFirst.runner(),
            Algorithm::GreedyBestFirst.runner(),
        ];

        {
            let mut lockstep = Lockstep::new(&mut runners, &grid).unwrap();
            assert_eq!(lockstep.step(), 2);
            assert_eq!(lockstep.visitors(Cell::new(0, 0)), &[0, 1]);

            // greedy walks the top row; breadth-first fans out
            assert_eq!(lockstep.step(), 2);
            assert_eq!(lockstep.visitors(Cell::new(1, 0)), &[0]);
            assert_eq!(lockstep.visitors(Cell::new(0, 1)), &[1]);

            let ticks = lockstep.run(None);
            assert!(lockstep.is_finished());
            assert_eq!(ticks, 5);
            assert_eq!(lockstep.visitors(Cell::new(0, 2)), &[1, 0]);
        }

        assert!(runners.iter().all(|r| r.status() == SearchStatus::Found));
        assert_eq!(runners[1].visited(), 3);
    }

    #[test]
    fn budget_stops_early() {
        let grid = parse("0,0\n2,2\n   \n   \n   \n").unwrap();
        let mut runners = vec![Algorithm::BreadthFirst.runner()];

        let mut lockstep = Lockstep::new(&mut runners, &grid).unwrap();
        assert_eq!(lockstep.run(Some(3)), 3);
        assert!(!lockstep.is_finished());
        assert_eq!(lockstep.visits().len(), 3);
    }

    #[test]
    fn one_bad_runner_stops_everything() {
        let grid = parse("0,0\n-\n  \n").unwrap();
        let mut runners = vec![Algorithm::BreadthFirst.runner(), Algorithm::AStar.runner()];

        assert!(Lockstep::new(&mut runners, &grid).is_err());
    }
}
