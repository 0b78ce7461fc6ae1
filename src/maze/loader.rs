//! Text maze format.
//!
//! ```text
//! 0,0
//! 2,2
//!   +
//!  ++
//!
//! ```
//!
//! The first line holds the start as `row,col`, the second the goal (empty or `-`
//! when the maze has no goal). Every following line is a row of tiles where `+`
//! marks a wall.

use std::{fs, path::Path};

use eyre::WrapErr;

use super::{Cell, Grid, GridError, Tile};

pub fn parse(text: &str) -> Result<Grid, GridError> {
    let mut lines = text.lines().map(|line| line.trim_end_matches('\r'));

    let start = lines
        .next()
        .ok_or(GridError::MissingHeader { line: 1 })
        .and_then(|line| parse_cell(1, line))?;
    let goal = match lines.next() {
        None => return Err(GridError::MissingHeader { line: 2 }),
        Some(line) if line.trim().is_empty() || line.trim() == "-" => None,
        Some(line) => Some(parse_cell(2, line)?),
    };

    let mut rows: Vec<Vec<Tile>> = lines
        .map(|line| line.chars().map(Tile::from_char).collect())
        .collect();
    while rows.last().is_some_and(Vec::is_empty) {
        rows.pop();
    }

    Grid::new(rows, start, goal)
}

pub fn load(path: impl AsRef<Path>) -> eyre::Result<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read maze file {}", path.display()))?;

    let grid = parse(&text).wrap_err_with(|| format!("malformed maze in {}", path.display()))?;
    log::debug!(
        "loaded {}x{} maze from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );

    Ok(grid)
}

fn parse_cell(line: usize, text: &str) -> Result<Cell, GridError> {
    let bad = || GridError::BadCoordinates {
        line,
        text: text.to_string(),
    };

    let (row, col) = text.split_once(',').ok_or_else(bad)?;
    let row = row.trim().parse().map_err(|_| bad())?;
    let col = col.trim().parse().map_err(|_| bad())?;

    Ok(Cell::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let grid = parse("0,0\n2,2\n   \n + \n   \n").unwrap();

        assert_eq!(grid.bounds(), (3, 3));
        assert_eq!(grid.start(), Cell::new(0, 0));
        assert_eq!(grid.goal(), Some(Cell::new(2, 2)));
        assert!(!grid.is_traversable(1, 1));
        assert_eq!(grid.wall_count(), 1);
    }

    #[test]
    fn tolerates_crlf_and_spaces_in_header() {
        let grid = parse("1, 0\r\n 0,2\r\n+  \r\n  +\r\n").unwrap();

        assert_eq!(grid.start(), Cell::new(1, 0));
        assert_eq!(grid.goal(), Some(Cell::new(0, 2)));
        assert_eq!(grid.cols(), 3);
    }

    #[test]
    fn missing_goal_line_content() {
        let grid = parse("0,0\n-\n  \n").unwrap();
        assert_eq!(grid.goal(), None);

        let grid = parse("0,0\n\n  \n").unwrap();
        assert_eq!(grid.goal(), None);
    }

    #[test]
    fn start_and_goal_markers_are_open() {
        let grid = parse("0,1\n0,0\nES\n").unwrap();

        assert_eq!(grid.tile(Cell::new(0, 1)), Some(Tile::Start));
        assert_eq!(grid.tile(Cell::new(0, 0)), Some(Tile::Goal));
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(parse("").unwrap_err(), GridError::MissingHeader { line: 1 });
        assert_eq!(
            parse("0,0").unwrap_err(),
            GridError::MissingHeader { line: 2 }
        );
        assert!(matches!(
            parse("a,b\n0,0\n  \n"),
            Err(GridError::BadCoordinates { line: 1, .. })
        ));
        assert!(matches!(
            parse("0,0\n1;1\n  \n"),
            Err(GridError::BadCoordinates { line: 2, .. })
        ));
        assert!(matches!(
            parse("0,0\n1,1\n  \n \n"),
            Err(GridError::RaggedRows { row: 1, .. })
        ));
        assert!(matches!(
            parse("0,0\n0,1\n +\n  \n"),
            Err(GridError::OnWall { role: "goal", .. })
        ));
        assert_eq!(parse("0,0\n0,1\n").unwrap_err(), GridError::Empty);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load("definitely/not/a/maze.txt").unwrap_err();
        assert!(err.to_string().contains("failed to read maze file"));
    }
}
