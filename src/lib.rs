//! Grid maze search engine.
//!
//! A [`Grid`](maze::Grid) answers traversability questions; a
//! [`Runner`](algorithms::pathfinding::Runner) explores it with one of five strategies
//! (breadth-first, recursive depth-first, greedy best-first, A* and A* with a
//! collinearity tie-break) and hands back its visits one at a time before
//! reconstructing the path.

pub mod algorithms;
pub mod maze;
