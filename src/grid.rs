//! The square letter grid and the cell-level rules for writing a word into it.
//!
//! A [`Grid`] is never changed in place by placement: [`Grid::try_place`] returns a new grid
//! when the word fits, and `None` when it doesn't. Callers exploring alternatives can keep the
//! grid they started from and simply drop the returned one to undo.

use crate::placement::{Direction, Placement};
use crate::puzzle_char::{PuzzleChar, BLANK};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
}

impl Grid {
    /// An all-blank `size`×`size` grid.
    ///
    /// # Panics
    ///
    /// If `size * size` cells cannot be allocated. [`crate::generator::Generator::new`]
    /// rejects sizes above [`crate::generator::MAX_GRID_SIZE`] before getting here.
    #[must_use]
    pub fn new(size: usize) -> Self {
        // An overflowing square must not wrap into a small buffer.
        let len = size.checked_mul(size).unwrap_or(usize::MAX);
        Grid { size, cells: vec![BLANK; len] }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The cell at (`row`, `col`), or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// True if (`row`, `col`) is inside the grid and holds a letter.
    /// `None` coordinates stand for positions before the first row/column.
    fn is_filled(&self, row: Option<usize>, col: Option<usize>) -> bool {
        match (row, col) {
            (Some(r), Some(c)) => self.get(r, c).is_some_and(|ch| !ch.is_blank()),
            _ => false,
        }
    }

    /// Write `word` starting at `placement`, returning the resulting grid.
    ///
    /// Returns `None` (and leaves `self` untouched) when:
    /// - any letter would fall outside the grid;
    /// - the cell just before the first letter or just after the last one holds a letter,
    ///   which would extend an existing word;
    /// - a blank cell the word passes through has a letter on either side perpendicular to
    ///   the word, which would fuse two words side by side;
    /// - an occupied cell holds a different letter than the word needs there.
    #[must_use]
    pub fn try_place(&self, placement: Placement, word: &[char]) -> Option<Grid> {
        let len = word.len();
        if len == 0 {
            return None;
        }

        let Placement { row, col, direction } = placement;
        let (dr, dc) = direction.step();
        let (end_row, end_col) = (row + (len - 1) * dr, col + (len - 1) * dc);
        if end_row >= self.size || end_col >= self.size {
            return None;
        }

        // Ends must not abut another letter along the word's axis.
        let before = (row.checked_sub(dr), col.checked_sub(dc));
        let after = (Some(end_row + dr), Some(end_col + dc));
        if self.is_filled(before.0, before.1) || self.is_filled(after.0, after.1) {
            return None;
        }

        for ((r, c), &letter) in placement.cells(len).zip(word) {
            let existing = self.cells[r * self.size + c];
            if existing.is_blank() {
                let side_by_side = match direction {
                    Direction::Across => {
                        self.is_filled(r.checked_sub(1), Some(c)) || self.is_filled(Some(r + 1), Some(c))
                    }
                    Direction::Down => {
                        self.is_filled(Some(r), c.checked_sub(1)) || self.is_filled(Some(r), Some(c + 1))
                    }
                };
                if side_by_side {
                    return None;
                }
            } else if existing != letter {
                return None;
            }
        }

        let mut result = self.clone();
        for ((r, c), &letter) in placement.cells(len).zip(word) {
            result.cells[r * self.size + c] = letter;
        }
        Some(result)
    }

    /// One string per row, blanks shown as [`BLANK`].
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size.max(1))
            .take(self.size)
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Direction::{Across, Down};

    fn letters(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn place(grid: &Grid, row: usize, col: usize, dir: Direction, word: &str) -> Option<Grid> {
        grid.try_place(Placement::new(row, col, dir), &letters(word))
    }

    #[test]
    fn test_place_on_empty_grid() {
        let grid = place(&Grid::new(5), 2, 1, Across, "CAT").unwrap();

        assert_eq!(grid.rows(), vec!["_____", "_____", "_CAT_", "_____", "_____"]);
    }

    #[test]
    fn test_original_grid_untouched() {
        let empty = Grid::new(4);
        let placed = place(&empty, 0, 0, Down, "DOG").unwrap();

        assert_eq!(empty, Grid::new(4));
        assert_eq!(placed.get(2, 0), Some('G'));
    }

    #[test]
    fn test_reject_out_of_bounds() {
        let grid = Grid::new(3);
        assert!(place(&grid, 0, 1, Across, "CAT").is_none());
        assert!(place(&grid, 1, 0, Down, "CAT").is_none());
        assert!(place(&grid, 0, 0, Across, "CATS").is_none());
        assert!(place(&grid, 3, 0, Across, "A").is_none());
    }

    #[test]
    fn test_word_may_touch_every_edge() {
        let grid = Grid::new(3);
        assert!(place(&grid, 0, 0, Across, "CAT").is_some());
        assert!(place(&grid, 0, 2, Down, "CAT").is_some());
    }

    #[test]
    fn test_valid_crossing() {
        let grid = place(&Grid::new(5), 2, 1, Across, "CAT").unwrap();
        let grid = place(&grid, 1, 2, Down, "BAD").unwrap();

        assert_eq!(grid.rows(), vec!["_____", "__B__", "_CAT_", "__D__", "_____"]);
    }

    #[test]
    fn test_reject_conflicting_crossing() {
        let grid = place(&Grid::new(5), 2, 1, Across, "CAT").unwrap();

        assert!(place(&grid, 1, 2, Down, "BOD").is_none());
    }

    #[test]
    fn test_reject_end_abutment() {
        let grid = place(&Grid::new(7), 3, 1, Across, "CAT").unwrap();

        // would continue CAT into CATOX
        assert!(place(&grid, 3, 4, Across, "OX").is_none());
        // last letter would sit directly above the C
        assert!(place(&grid, 1, 1, Down, "AB").is_none());
        // first letter would sit directly below the T
        assert!(place(&grid, 4, 3, Down, "AB").is_none());
    }

    #[test]
    fn test_reject_side_by_side() {
        let grid = place(&Grid::new(5), 2, 1, Across, "CAT").unwrap();

        assert!(place(&grid, 1, 1, Across, "DOG").is_none());
        assert!(place(&grid, 3, 2, Across, "DOG").is_none());
        assert!(place(&grid, 1, 0, Down, "ON").is_none());
    }

    #[test]
    fn test_display() {
        let grid = place(&Grid::new(3), 1, 0, Across, "OWL").unwrap();

        assert_eq!(grid.to_string(), "___\nOWL\n___\n");
    }
}
