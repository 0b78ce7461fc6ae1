use super::{cell::Cell, error::GridError, tile::Tile};

/// immutable traversability oracle over a rectangular maze
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
    start: Cell,
    goal: Option<Cell>,
}

impl Grid {
    /// Builds a grid from rows of tiles, marking the start and goal tiles.
    ///
    /// Fails when the rows are empty or ragged, or when the start or goal is out of
    /// bounds or on a wall. `Start`/`Goal` tiles elsewhere in the input are kept as
    /// plain open floor.
    pub fn new(tiles: Vec<Vec<Tile>>, start: Cell, goal: Option<Cell>) -> Result<Self, GridError> {
        let rows = tiles.len();
        let cols = tiles.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        let mut flat = Vec::with_capacity(rows * cols);
        for (row, line) in tiles.into_iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::RaggedRows {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            flat.extend(line.into_iter().map(|tile| match tile {
                Tile::Start | Tile::Goal => Tile::Open,
                other => other,
            }));
        }

        let mut grid = Self {
            tiles: flat,
            rows,
            cols,
            start,
            goal: None,
        };
        grid.check_endpoint("start", start)?;
        grid.tiles[start.to_index(cols)] = Tile::Start;
        grid.set_goal(goal)?;

        Ok(grid)
    }

    /// Re-marks the goal tile, or removes the goal altogether.
    pub fn set_goal(&mut self, goal: Option<Cell>) -> Result<(), GridError> {
        if let Some(cell) = goal {
            self.check_endpoint("goal", cell)?;
        }

        if let Some(old) = self.goal.take() {
            let idx = old.to_index(self.cols);
            self.tiles[idx] = if old == self.start {
                Tile::Start
            } else {
                Tile::Open
            };
        }

        // a goal on the start cell keeps the start marker
        if let Some(cell) = goal
            && cell != self.start
        {
            self.tiles[cell.to_index(self.cols)] = Tile::Goal;
        }
        self.goal = goal;

        Ok(())
    }

    fn check_endpoint(&self, role: &'static str, cell: Cell) -> Result<(), GridError> {
        match self.tile(cell) {
            None => Err(GridError::OutOfBounds { role, cell }),
            Some(Tile::Wall) => Err(GridError::OnWall { role, cell }),
            Some(_) => Ok(()),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }

    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        if cell.row < self.rows && cell.col < self.cols {
            Some(self.tiles[cell.to_index(self.cols)])
        } else {
            None
        }
    }

    pub fn is_traversable(&self, row: usize, col: usize) -> bool {
        self.tile(Cell::new(row, col))
            .is_some_and(Tile::is_traversable)
    }

    /// in-bounds, non-wall neighbors in north, south, east, west order
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        cell.adjacent(self.bounds())
            .filter(|n| self.is_traversable(n.row, n.col))
            .collect()
    }

    pub fn wall_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t == Tile::Wall).count()
    }

    /// renders the tile rows back into the text maze alphabet
    pub fn tile_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.tiles
            .chunks(self.cols)
            .map(|row| row.iter().map(|tile| tile.as_char()).collect())
    }
}
