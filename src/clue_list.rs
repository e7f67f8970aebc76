//! `clue_list`: load and validate the (word, hint) list for a puzzle
//!
//! The clue list is read either from a file, or from an in-memory string (the latter is what
//! WebAssembly builds use, since direct file I/O isn't allowed there).
//!
//! The parsing logic:
//! - Each line is expected to be `WORD HINT`: the word is everything before the first space,
//!   the hint is everything after it.
//! - Blank lines are skipped.
//! - A line without a space, or with an empty hint, is an error. Malformed lines are never
//!   silently dropped, because a missing word would change the puzzle.
//! - Words are normalised to uppercase and may only contain A-Z.
//! - Input order is preserved; a clue's identity is its index in the list.

use crate::errors::LoadError;
use crate::puzzle_char::PuzzleChar;

/// One word to place in the grid, with the hint printed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    /// Uppercase letters, A-Z only.
    pub word: String,
    pub hint: String,
}

impl Clue {
    /// Number of grid cells the word occupies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Struct representing a validated clue list, in input order.
#[derive(Debug, Clone, Default)]
pub struct ClueList {
    pub clues: Vec<Clue>,
}

impl ClueList {
    /// Parse a clue list from an in-memory string.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] for the first line that cannot be split into a word and a
    /// non-empty hint, or whose word contains anything other than letters. Input holding
    /// no clue lines at all yields [`LoadError::EmptyClueList`].
    pub fn parse_from_str(contents: &str) -> Result<ClueList, Box<LoadError>> {
        let clues = contents
            .lines()
            .enumerate()
            .filter(|(_, raw_line)| !raw_line.trim().is_empty())
            .map(|(i, raw_line)| parse_line(i + 1, raw_line))
            .collect::<Result<Vec<_>, _>>()?;

        if clues.is_empty() {
            return Err(Box::new(LoadError::EmptyClueList));
        }

        Ok(ClueList { clues })
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, or any error from
    /// [`ClueList::parse_from_str`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<ClueList, Box<LoadError>> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| {
            Box::new(LoadError::Io { path: path_ref.to_path_buf(), source })
        })?;
        let clue_list = Self::parse_from_str(&data)?;
        log::debug!("loaded {} clues from {}", clue_list.len(), path_ref.display());
        Ok(clue_list)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }
}

fn parse_line(line_number: usize, raw_line: &str) -> Result<Clue, Box<LoadError>> {
    // Whitespace is only trimmed from the hint; a leading space means an empty word.
    let line = raw_line.trim_end_matches('\r');

    let Some((word_raw, hint_raw)) = line.split_once(' ') else {
        return Err(Box::new(LoadError::MalformedRecord {
            line_number,
            line: line.to_string(),
        }));
    };

    if word_raw.is_empty() {
        return Err(Box::new(LoadError::MalformedRecord {
            line_number,
            line: line.to_string(),
        }));
    }

    // ASCII-only so non-Latin letters stay as written and get rejected below.
    let word = word_raw.to_ascii_uppercase();
    if let Some(invalid_char) = word.chars().find(|c| !c.is_grid_letter()) {
        return Err(Box::new(LoadError::InvalidLetter {
            line_number,
            word: word_raw.to_string(),
            invalid_char,
        }));
    }

    let hint = hint_raw.trim();
    if hint.is_empty() {
        return Err(Box::new(LoadError::EmptyHint { line_number, word }));
    }

    Ok(Clue { word, hint: hint.to_string() })
}
