//! The finished puzzle document, as written to JSON.

use crate::clue_list::Clue;
use crate::generator::Solution;
use crate::numbering::number_clues;
use crate::placement::Direction;
use serde::Serialize;

/// Title used when the caller doesn't supply one.
pub const DEFAULT_TITLE: &str = "insert title";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleClue {
    pub row: usize,
    pub col: usize,
    pub hint: String,
    pub num: usize,
    pub dir: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub title: String,
    pub num_rows: usize,
    pub num_cols: usize,
    /// One string per grid row; blank cells use [`crate::puzzle_char::BLANK`].
    pub answers: Vec<String>,
    /// One entry per input clue, in input order.
    pub clues: Vec<PuzzleClue>,
}

impl Puzzle {
    #[must_use]
    pub fn assemble(title: &str, clues: &[Clue], solution: &Solution) -> Self {
        let size = solution.grid.size();
        let clues = number_clues(&solution.placements, clues)
            .into_iter()
            .map(|c| PuzzleClue {
                row: c.row,
                col: c.col,
                hint: c.hint,
                num: c.number,
                dir: c.direction,
            })
            .collect();

        Puzzle {
            title: title.to_string(),
            num_rows: size,
            num_cols: size,
            answers: solution.grid.rows(),
            clues,
        }
    }

    /// Pretty-printed JSON with four-space indentation.
    ///
    /// # Errors
    ///
    /// Only if serialization fails, which plain strings and integers never do.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue_list::ClueList;
    use crate::generator::generate;

    fn sample() -> Puzzle {
        let clue_list = ClueList::parse_from_str("CAT feline\nCAR vehicle\nART skill").unwrap();
        let solution = generate(&clue_list.clues, 6).unwrap();
        Puzzle::assemble(DEFAULT_TITLE, &clue_list.clues, &solution)
    }

    #[test]
    fn test_assemble() {
        let puzzle = sample();

        assert_eq!(puzzle.num_rows, 6);
        assert_eq!(puzzle.num_cols, 6);
        assert_eq!(puzzle.answers[1], "__CAR_");
        assert_eq!(
            puzzle.clues[0],
            PuzzleClue { row: 3, col: 1, hint: "feline".to_string(), num: 3, dir: Direction::Across }
        );
        assert_eq!(puzzle.clues[1].num, 1);
        assert_eq!(puzzle.clues[2].num, 2);
    }

    #[test]
    fn test_json_field_names() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "insert title");
        assert_eq!(value["numRows"], 6);
        assert_eq!(value["numCols"], 6);
        assert_eq!(value["answers"][3], "_CAT__");
        assert_eq!(value["clues"][2]["dir"], "down");
        assert_eq!(value["clues"][2]["hint"], "skill");
        assert!(json.contains("\n    \"numRows\": 6"));
    }
}
