//! Character classes used in clue words and grid cells.

use std::ops::RangeInclusive;

/// Marker stored in grid cells that do not hold a letter yet.
pub const BLANK: char = '_';

pub(crate) const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';

pub(crate) trait PuzzleChar {
    fn is_blank(&self) -> bool;
    fn is_grid_letter(&self) -> bool;
}

impl PuzzleChar for char {
    fn is_blank(&self) -> bool {
        *self == BLANK
    }
    fn is_grid_letter(&self) -> bool {
        UPPERCASE_ALPHABET.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(BLANK.is_blank());
        assert!(!'A'.is_blank());
        assert!(!' '.is_blank());
    }

    #[test]
    fn test_is_grid_letter() {
        for c in UPPERCASE_ALPHABET {
            assert!(c.is_grid_letter());
        }
    }

    #[test]
    fn test_is_not_grid_letter() {
        assert!(!'a'.is_grid_letter()); // lowercase is normalised away before placement
        assert!(!BLANK.is_grid_letter());
        assert!(!'1'.is_grid_letter());
        assert!(!'-'.is_grid_letter());
        assert!(!'É'.is_grid_letter());
    }
}
