mod cell;
mod error;
mod generator;
mod grid;
mod loader;
mod tile;

pub use cell::{Cell, Direction};
pub use error::GridError;
pub use generator::generate;
pub use grid::Grid;
pub use loader::{load, parse};
pub use tile::Tile;
