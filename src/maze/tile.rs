#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
    Start,
    Goal,
}

impl Tile {
    pub const WALL_CHAR: char = '+';

    /// anything that is not a wall, start or goal marker is open floor
    pub fn from_char(c: char) -> Self {
        match c {
            Self::WALL_CHAR => Self::Wall,
            'S' => Self::Start,
            'E' => Self::Goal,
            _ => Self::Open,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Open => ' ',
            Self::Wall => Self::WALL_CHAR,
            Self::Start => 'S',
            Self::Goal => 'E',
        }
    }

    pub fn is_traversable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}
