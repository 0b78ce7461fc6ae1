use clap::ValueEnum;

use super::{
    astar::AStar, bfs::BreadthFirst, greedy::GreedyBestFirst, recursive::RecursiveDepthFirst,
    runner::Runner, traits::SearchRunner,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Breadth-first search, shortest path in moves
    #[value(name = "bfs", alias = "breadth-first")]
    BreadthFirst,

    /// Recursive depth-first descent
    #[value(name = "dfs", alias = "recursive")]
    RecursiveDepthFirst,

    /// Greedy best-first search on Manhattan distance
    #[value(name = "greedy")]
    GreedyBestFirst,

    /// A* with Manhattan distance heuristic
    #[value(name = "astar", alias = "a-star")]
    AStar,

    /// A* nudged towards the straight start-goal line
    #[value(name = "astar-tiebreak", alias = "tiebreak")]
    AStarTiebreak,
}

impl Algorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::BreadthFirst,
            Self::RecursiveDepthFirst,
            Self::GreedyBestFirst,
            Self::AStar,
            Self::AStarTiebreak,
        ]
        .into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth-First",
            Self::RecursiveDepthFirst => "Recursive Depth-First",
            Self::GreedyBestFirst => "Greedy Best-First",
            Self::AStar => "A*",
            Self::AStarTiebreak => "A* (tie-break)",
        }
    }

    pub fn requires_goal(&self) -> bool {
        matches!(
            self,
            Self::GreedyBestFirst | Self::AStar | Self::AStarTiebreak
        )
    }

    pub fn runner(self) -> Box<dyn SearchRunner> {
        match self {
            Self::BreadthFirst => Box::new(Runner::new(BreadthFirst::default())),
            Self::RecursiveDepthFirst => Box::new(Runner::new(RecursiveDepthFirst::default())),
            Self::GreedyBestFirst => Box::new(Runner::new(GreedyBestFirst::default())),
            Self::AStar => Box::new(Runner::new(AStar::new())),
            Self::AStarTiebreak => Box::new(Runner::new(AStar::tiebreak())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runner_names_match() {
        for algorithm in Algorithm::all() {
            assert_eq!(algorithm.runner().name(), algorithm.name());
        }
    }

    #[test]
    fn parses_cli_names() {
        assert_eq!(
            Algorithm::from_str("astar-tiebreak", true),
            Ok(Algorithm::AStarTiebreak)
        );
        assert_eq!(Algorithm::from_str("a-star", true), Ok(Algorithm::AStar));
        assert_eq!(Algorithm::from_str("bfs", true), Ok(Algorithm::BreadthFirst));
        assert!(Algorithm::from_str("dijkstra", true).is_err());
    }
}
