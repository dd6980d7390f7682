use super::{Cell, LivingSet};

/// A named starting pattern that can be stamped onto the board.
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: i32,
    pub height: i32,
    /// Relative coordinates of the pattern's live cells.
    pub cells: Vec<(i32, i32)>,
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i32, i32)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self {
            name,
            description,
            width,
            height,
            cells,
        }
    }

    /// Stamp the pattern onto the living set with its top-left corner at
    /// `(x, y)`. Cells already alive stay alive.
    pub fn place_on(&self, living: &mut LivingSet, x: i32, y: i32) {
        for &(dx, dy) in &self.cells {
            living.insert(Cell::new(x + dx, y + dy));
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 1), (1, 1), (2, 1)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0),
                (4, 0),
                (0, 1),
                (0, 2),
                (4, 2),
                (0, 3),
                (1, 3),
                (2, 3),
                (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            lwss(),
            r_pentomino(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_dimensions_derive_from_cells() {
        let glider = presets::glider();
        assert_eq!(glider.width, 3);
        assert_eq!(glider.height, 3);
        assert_eq!(glider.cells.len(), 5);
    }

    #[test]
    fn test_place_on_offsets_every_cell() {
        let mut living = LivingSet::new();
        presets::block().place_on(&mut living, 10, 20);
        let expected: LivingSet = [(10, 20), (11, 20), (10, 21), (11, 21)]
            .iter()
            .map(|&(x, y)| Cell::new(x, y))
            .collect();
        assert_eq!(living, expected);
    }

    #[test]
    fn test_place_on_accepts_negative_origin() {
        let mut living = LivingSet::new();
        presets::blinker().place_on(&mut living, -2, -1);
        assert!(living.contains(Cell::new(-2, 0)));
        assert_eq!(living.len(), 3);
    }
}
