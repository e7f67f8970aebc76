//! Where a word sits in the grid: its start cell and direction.

use serde::Serialize;
use std::fmt;

/// Orientation of a word in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The direction a crossing word runs in.
    #[must_use]
    pub fn orthogonal(self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// (row, col) step between consecutive letters.
    #[must_use]
    pub fn step(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Start cell and orientation of a placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Placement {
    #[must_use]
    pub fn new(row: usize, col: usize, direction: Direction) -> Self {
        Placement { row, col, direction }
    }

    /// Grid cells covered by a word of `len` letters at this placement, first letter first.
    pub fn cells(&self, len: usize) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.direction.step();
        let (row, col) = (self.row, self.col);
        (0..len).map(move |i| (row + i * dr, col + i * dc))
    }
}
