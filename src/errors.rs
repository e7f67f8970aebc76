//! Error types for loading clue lists, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (L001-L005) for documentation lookup:
//!
//! - L001: `MalformedRecord` (Clue line has no hint)
//! - L002: `EmptyHint` (Hint is blank)
//! - L003: `InvalidLetter` (Word contains a non-letter)
//! - L004: `EmptyClueList` (No clues in the input)
//! - L005: `Io` (Clue file could not be read)
//!
//! # Examples
//!
//! ```
//! use mkpuzzle::clue_list::ClueList;
//!
//! match ClueList::parse_from_str("CAT") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Failure while turning clue text into a [`crate::clue_list::ClueList`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("line {line_number}: expected \"WORD HINT\", got \"{line}\"")]
    MalformedRecord { line_number: usize, line: String },

    #[error("line {line_number}: hint for \"{word}\" is empty")]
    EmptyHint { line_number: usize, word: String },

    #[error("line {line_number}: \"{word}\" contains invalid character '{invalid_char}' (only A-Z allowed)")]
    InvalidLetter { line_number: usize, word: String, invalid_char: char },

    #[error("clue list contains no clues")]
    EmptyClueList,

    #[error("failed to read clue list from '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::MalformedRecord { .. } => "L001",
            LoadError::EmptyHint { .. } => "L002",
            LoadError::InvalidLetter { .. } => "L003",
            LoadError::EmptyClueList => "L004",
            LoadError::Io { .. } => "L005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            LoadError::MalformedRecord { .. } => "Clue line has no hint",
            LoadError::EmptyHint { .. } => "Hint is blank",
            LoadError::InvalidLetter { .. } => "Word contains a non-letter",
            LoadError::EmptyClueList => "No clues in the input",
            LoadError::Io { .. } => "Clue file could not be read",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            LoadError::MalformedRecord { .. } => "Every non-empty line must hold a word, a single space, and the hint text. A line with no space cannot be split into a word and a hint.",
            LoadError::EmptyHint { .. } => "The text after the word was only whitespace. Every word placed in the grid needs a hint to be printed with its number.",
            LoadError::InvalidLetter { .. } => "Words are written into grid cells one letter per cell, so they may only contain the letters A-Z (case-insensitive). Digits, punctuation and the blank marker '_' are rejected.",
            LoadError::EmptyClueList => "The input contained no clue lines at all (only blank lines, or nothing).",
            LoadError::Io { .. } => "The clue file could not be opened or was not valid UTF-8.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LoadError::MalformedRecord { .. } => Some("Example line: 'CAT small domesticated feline'"),
            LoadError::EmptyHint { .. } => Some("Add hint text after the word, separated by a space"),
            LoadError::InvalidLetter { .. } => Some("Remove spaces, hyphens and digits from the word (e.g., 'ICECREAM' not 'ICE-CREAM')"),
            LoadError::EmptyClueList => Some("Add at least one line of the form 'WORD hint text'"),
            LoadError::Io { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

impl From<LoadError> for io::Error {
    fn from(le: LoadError) -> Self {
        match le {
            LoadError::Io { source, .. } => source,
            other => io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
