use std::collections::HashSet;

use super::Cell;

/// LivingSet is the sparse representation of the board: only live cells are
/// stored, the rest of the plane is implicitly dead. Membership tests are
/// O(1) average, which the generation engine relies on for its 8-lookup
/// neighbor counts.
///
/// In bounded mode the set may transiently hold cells outside the visible
/// viewport; those still evolve but are neither rendered nor counted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LivingSet {
    cells: HashSet<Cell>,
}

impl LivingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Insert a cell, returning true if it was not already alive.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Remove a cell, returning true if it was alive.
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    /// Flip a single cell's membership. Returns the cell's new state:
    /// true if it is now alive. Toggling twice is a no-op.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Count the live cells inside the visible viewport. Off-board cells
    /// (bounded mode only) are excluded even though they keep evolving.
    pub fn count_visible(&self, board_size: i32) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.in_bounds(board_size))
            .count()
    }

    /// Discard every cell outside `[0, board_size)` on either axis.
    /// This is lossy: enlarging the board afterwards does not bring the
    /// discarded cells back.
    pub fn trim_to_size(&mut self, board_size: i32) {
        self.cells.retain(|cell| cell.in_bounds(board_size));
    }

    /// Convert a legacy dense row-major grid (`rows[y][x]`) into the sparse
    /// representation. Old snapshots persisted the whole board this way.
    pub fn from_dense_rows(rows: &[Vec<bool>]) -> Self {
        rows.iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, alive)| **alive)
                    .map(move |(x, _)| Cell::new(x as i32, y as i32))
            })
            .collect()
    }
}

impl FromIterator<Cell> for LivingSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(cells: &[(i32, i32)]) -> LivingSet {
        cells.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut set = set_of(&[(1, 1), (2, 2)]);
        let original = set.clone();

        assert!(set.toggle(Cell::new(5, 5)));
        assert!(!set.toggle(Cell::new(5, 5)));
        assert_eq!(set, original);

        assert!(!set.toggle(Cell::new(1, 1)));
        assert!(set.toggle(Cell::new(1, 1)));
        assert_eq!(set, original);
    }

    #[test]
    fn test_count_visible_excludes_off_board_cells() {
        let set = set_of(&[(0, 0), (9, 9), (10, 3), (-1, 5), (4, 12)]);
        assert_eq!(set.len(), 5);
        assert_eq!(set.count_visible(10), 2);
    }

    #[test]
    fn test_trim_is_lossy_and_idempotent() {
        let mut set = set_of(&[(0, 0), (4, 4), (5, 5), (12, 3)]);
        set.trim_to_size(5);
        assert_eq!(set, set_of(&[(0, 0), (4, 4)]));

        let after_first = set.clone();
        set.trim_to_size(5);
        assert_eq!(set, after_first);

        // Enlarging does not resurrect anything.
        set.trim_to_size(20);
        assert_eq!(set, after_first);
    }

    #[test]
    fn test_from_dense_rows() {
        let rows = vec![
            vec![false, true, false],
            vec![],
            vec![true, false, false, true],
        ];
        let set = LivingSet::from_dense_rows(&rows);
        assert_eq!(set, set_of(&[(1, 0), (0, 2), (3, 2)]));
    }

    #[test]
    fn test_from_dense_rows_empty() {
        assert!(LivingSet::from_dense_rows(&[]).is_empty());
    }
}
