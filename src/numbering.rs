//! Standard crossword numbering of a finished layout.
//!
//! Start cells are numbered 1, 2, 3… in reading order (top to bottom, then left to right).
//! An across word and a down word that start in the same cell share one number.

use crate::clue_list::Clue;
use crate::placement::{Direction, Placement};
use std::collections::BTreeMap;

/// A clue as it appears in the finished puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedClue {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub number: usize,
    pub hint: String,
}

/// Number every placement. The result is indexed like `placements` (and `clues`).
#[must_use]
pub fn number_clues(placements: &[Placement], clues: &[Clue]) -> Vec<NumberedClue> {
    debug_assert_eq!(placements.len(), clues.len());

    // BTreeMap iterates (row, col) keys in reading order.
    let mut numbers: BTreeMap<(usize, usize), usize> =
        placements.iter().map(|p| ((p.row, p.col), 0)).collect();
    for (i, number) in numbers.values_mut().enumerate() {
        *number = i + 1;
    }

    placements
        .iter()
        .zip(clues)
        .map(|(p, clue)| NumberedClue {
            row: p.row,
            col: p.col,
            direction: p.direction,
            number: numbers[&(p.row, p.col)],
            hint: clue.hint.clone(),
        })
        .collect()
}
