use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Cell identifies one board position by its integer coordinates.
/// Equal coordinates mean the same cell; there is no identity beyond them.
///
/// Coordinates are signed because the bounded edge policy lets life spill
/// past the visible viewport into a virtual plane.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// The eight Moore-neighborhood offsets surrounding a cell.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbor of this cell in the given offset direction under the board's
    /// edge policy.
    ///
    /// With `wrap` each axis independently wraps modulo `board_size`
    /// (toroidal topology): `-1` becomes `board_size - 1` and `board_size`
    /// becomes `0`. Without it the coordinate is returned unclamped and may
    /// lie outside the visible viewport.
    pub fn neighbor(self, offset: (i32, i32), board_size: i32, wrap: bool) -> Cell {
        let mut nx = self.x + offset.0;
        let mut ny = self.y + offset.1;

        if wrap {
            if nx < 0 {
                nx = board_size - 1;
            } else if nx >= board_size {
                nx = 0;
            }
            if ny < 0 {
                ny = board_size - 1;
            } else if ny >= board_size {
                ny = 0;
            }
        }

        Cell::new(nx, ny)
    }

    /// All eight neighbors under the given edge policy.
    pub fn neighbors(self, board_size: i32, wrap: bool) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&offset| self.neighbor(offset, board_size, wrap))
    }

    /// Whether this cell lies inside the visible viewport `[0, board_size)`
    /// on both axes. Off-board cells still evolve; they are not rendered
    /// or counted.
    pub const fn in_bounds(self, board_size: i32) -> bool {
        self.x >= 0 && self.x < board_size && self.y >= 0 && self.y < board_size
    }
}

/// Error returned when an `"x,y"` coordinate key fails to parse.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid cell key `{0}`, expected `x,y`")]
pub struct ParseCellError(pub String);

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Cell {
    type Err = ParseCellError;

    /// Parse a canonical `"x,y"` coordinate key, the form snapshots use.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or_else(|| ParseCellError(s.to_owned()))?;
        let x = x.trim().parse().map_err(|_| ParseCellError(s.to_owned()))?;
        let y = y.trim().parse().map_err(|_| ParseCellError(s.to_owned()))?;
        Ok(Cell::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_offsets_are_the_full_moore_neighborhood() {
        let unique: HashSet<_> = NEIGHBOR_OFFSETS.iter().collect();
        assert_eq!(unique.len(), 8);
        assert!(!unique.contains(&&(0, 0)));
    }

    #[test]
    fn test_wrap_maps_edges_onto_each_other() {
        let size = 10;
        assert_eq!(Cell::new(0, 0).neighbor((-1, 0), size, true), Cell::new(9, 0));
        assert_eq!(Cell::new(0, 0).neighbor((0, -1), size, true), Cell::new(0, 9));
        assert_eq!(Cell::new(9, 9).neighbor((1, 0), size, true), Cell::new(0, 9));
        assert_eq!(Cell::new(9, 9).neighbor((0, 1), size, true), Cell::new(9, 0));
        assert_eq!(Cell::new(9, 0).neighbor((1, -1), size, true), Cell::new(0, 9));
    }

    #[test]
    fn test_corners_are_adjacent_under_wrap() {
        let size = 9;
        let neighbors: HashSet<_> = Cell::new(0, 0).neighbors(size, true).collect();
        assert!(neighbors.contains(&Cell::new(8, 8)));
        assert!(neighbors.contains(&Cell::new(8, 0)));
        assert!(neighbors.contains(&Cell::new(0, 8)));
    }

    #[test]
    fn test_bounded_mode_returns_unclamped_coordinates() {
        let size = 10;
        assert_eq!(Cell::new(0, 0).neighbor((-1, -1), size, false), Cell::new(-1, -1));
        assert_eq!(Cell::new(9, 9).neighbor((1, 1), size, false), Cell::new(10, 10));
    }

    #[test]
    fn test_in_bounds() {
        assert!(Cell::new(0, 0).in_bounds(10));
        assert!(Cell::new(9, 9).in_bounds(10));
        assert!(!Cell::new(-1, 0).in_bounds(10));
        assert!(!Cell::new(0, 10).in_bounds(10));
    }

    #[test]
    fn test_key_round_trip() {
        let cell = Cell::new(-3, 47);
        assert_eq!(cell.to_string(), "-3,47");
        assert_eq!("-3,47".parse::<Cell>(), Ok(cell));
    }

    #[test]
    fn test_key_parse_errors() {
        assert!("".parse::<Cell>().is_err());
        assert!("12".parse::<Cell>().is_err());
        assert!("a,b".parse::<Cell>().is_err());
        assert!("1,2,3".parse::<Cell>().is_err());
    }
}
