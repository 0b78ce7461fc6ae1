use rand::Rng;

use super::{Cell, Grid, GridError, Tile};

/// Scatters walls over a `height` x `width` grid.
///
/// Each tile becomes a wall with probability `wall_ratio`. The start `(0, 0)` and the
/// goal in the opposite corner are always open, but nothing guarantees they are
/// connected.
pub fn generate<R: Rng>(
    width: usize,
    height: usize,
    wall_ratio: f64,
    rng: &mut R,
) -> Result<Grid, GridError> {
    if !(0.0..=1.0).contains(&wall_ratio) {
        return Err(GridError::InvalidWallRatio(wall_ratio));
    }
    if width == 0 || height == 0 {
        return Err(GridError::Empty);
    }

    let start = Cell::new(0, 0);
    let goal = Cell::new(height - 1, width - 1);

    let tiles = (0..height)
        .map(|row| {
            (0..width)
                .map(|col| {
                    let cell = Cell::new(row, col);
                    // draw for every tile so the sequence does not depend on the corners
                    let wall = rng.random_bool(wall_ratio);
                    if wall && cell != start && cell != goal {
                        Tile::Wall
                    } else {
                        Tile::Open
                    }
                })
                .collect()
        })
        .collect();

    let grid = Grid::new(tiles, start, Some(goal))?;
    log::debug!(
        "generated {}x{} maze with {} walls (ratio {:.2})",
        height,
        width,
        grid.wall_count(),
        wall_ratio
    );

    Ok(grid)
}
