mod algorithm;
mod astar;
mod bfs;
mod error;
mod frontier;
mod greedy;
mod heuristic;
mod lockstep;
mod recursive;
mod runner;
mod state;
pub mod traits;

pub use algorithm::Algorithm;
pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use error::SearchError;
pub use frontier::{FifoFrontier, Frontier, PriorityFrontier};
pub use greedy::GreedyBestFirst;
pub use heuristic::{Heuristic, TIEBREAK_WEIGHT};
pub use lockstep::Lockstep;
pub use recursive::RecursiveDepthFirst;
pub use runner::{Runner, Search};
pub use state::{SearchState, SearchStatus};
pub use traits::{SearchReport, SearchRunner, Strategy};
