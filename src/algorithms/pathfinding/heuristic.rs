use crate::maze::Cell;

/// Weight of the cross-product term added by [`Heuristic::Tiebreak`].
///
/// Small against one unit of Manhattan distance for short paths only. On long,
/// off-axis paths the term can exceed a whole step, so the tie-break estimate is not
/// admissible and A* may return slightly longer routes that hug the start-goal line.
pub const TIEBREAK_WEIGHT: f64 = 0.001;

/// Distance estimate from a cell to the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// `|d_row| + |d_col|`, admissible for unit-cost four-way movement
    #[default]
    Manhattan,

    /// Manhattan plus a nudge towards the straight start-goal line
    Tiebreak,
}

impl Heuristic {
    /// Zero when there is no goal.
    pub fn estimate(self, cell: Cell, start: Cell, goal: Option<Cell>) -> f64 {
        let Some(goal) = goal else {
            return 0.0;
        };

        let manhattan = cell.manhattan_distance(goal) as f64;
        match self {
            Self::Manhattan => manhattan,
            Self::Tiebreak => manhattan + TIEBREAK_WEIGHT * cross(cell, start, goal),
        }
    }
}

/// |(cell - goal) x (start - goal)|; zero on the start-goal line
fn cross(cell: Cell, start: Cell, goal: Cell) -> f64 {
    let dx1 = cell.col as f64 - goal.col as f64;
    let dy1 = cell.row as f64 - goal.row as f64;
    let dx2 = start.col as f64 - goal.col as f64;
    let dy2 = start.row as f64 - goal.row as f64;

    (dx1 * dy2 - dx2 * dy1).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Cell = Cell::new(0, 0);
    const GOAL: Cell = Cell::new(4, 4);

    #[test]
    fn manhattan_estimate() {
        let h = Heuristic::Manhattan;

        assert_eq!(h.estimate(START, START, Some(GOAL)), 8.0);
        assert_eq!(h.estimate(Cell::new(4, 1), START, Some(GOAL)), 3.0);
        assert_eq!(h.estimate(GOAL, START, Some(GOAL)), 0.0);
    }

    #[test]
    fn no_goal_is_zero() {
        assert_eq!(Heuristic::Manhattan.estimate(GOAL, START, None), 0.0);
        assert_eq!(Heuristic::Tiebreak.estimate(GOAL, START, None), 0.0);
    }

    #[test]
    fn tiebreak_prefers_the_diagonal() {
        let h = Heuristic::Tiebreak;
        let on_line = h.estimate(Cell::new(2, 2), START, Some(GOAL));
        let off_line = h.estimate(Cell::new(0, 4), START, Some(GOAL));

        assert_eq!(on_line, 4.0);
        assert!(off_line > 4.0);
        assert!((off_line - (4.0 + 16.0 * TIEBREAK_WEIGHT)).abs() < 1e-9);
    }

    #[test]
    fn tiebreak_never_reorders_whole_steps_nearby() {
        let h = Heuristic::Tiebreak;
        let closer = h.estimate(Cell::new(0, 4), START, Some(GOAL));
        let farther = h.estimate(Cell::new(1, 1), START, Some(GOAL));

        assert!(closer < farther);
    }
}
