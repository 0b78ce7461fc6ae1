//! Errors raised while building a [`Grid`](super::Grid).

use std::fmt;

use super::Cell;

/// A grid that cannot be searched.
///
/// Every variant is detected while the grid is being built, never during a search.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// No rows, or rows without columns.
    Empty,

    /// A row whose length differs from the first row.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The start or goal lies outside the grid.
    OutOfBounds { role: &'static str, cell: Cell },

    /// The start or goal sits on a wall tile.
    OnWall { role: &'static str, cell: Cell },

    /// A coordinate header line that is not `row,col`.
    BadCoordinates { line: usize, text: String },

    /// The text ended before the header lines were read.
    MissingHeader { line: usize },

    /// A generator wall ratio outside `0.0..=1.0`.
    InvalidWallRatio(f64),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no tiles"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} tiles, expected {}",
                row, found, expected
            ),
            Self::OutOfBounds { role, cell } => write!(f, "{} {} is out of bounds", role, cell),
            Self::OnWall { role, cell } => write!(f, "{} {} is on a wall", role, cell),
            Self::BadCoordinates { line, text } => {
                write!(f, "line {}: expected `row,col`, got {:?}", line, text)
            }
            Self::MissingHeader { line } => write!(f, "line {}: missing coordinate header", line),
            Self::InvalidWallRatio(ratio) => {
                write!(f, "wall ratio {} is outside 0.0..=1.0", ratio)
            }
        }
    }
}

impl std::error::Error for GridError {}
