use std::fmt;

/// one of the four axis-aligned moves, listed in neighbor enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    pub fn from_index(index: usize, cols: usize) -> Self {
        Self::new(index / cols, index % cols)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// `None` when the move would leave a `rows` x `cols` grid
    pub fn step(self, direction: Direction, bounds: (usize, usize)) -> Option<Self> {
        let (rows, cols) = bounds;
        match direction {
            Direction::North if self.row > 0 => Some(Self::new(self.row - 1, self.col)),
            Direction::South if self.row + 1 < rows => Some(Self::new(self.row + 1, self.col)),
            Direction::East if self.col + 1 < cols => Some(Self::new(self.row, self.col + 1)),
            Direction::West if self.col > 0 => Some(Self::new(self.row, self.col - 1)),
            _ => None,
        }
    }

    pub fn adjacent(self, bounds: (usize, usize)) -> impl Iterator<Item = Self> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(dir, bounds))
    }

    pub fn is_adjacent_to(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
