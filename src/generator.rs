//! The backtracking search that lays every word of a clue list into a square grid.
//!
//! # Strategy
//!
//! 1. The longest word (first one, on ties) goes across the middle row, centered.
//! 2. From the word just placed, each of its letters is tried in order. For every unused word
//!    that contains the same letter (in [`CrossIndex`] order) the generator places that word
//!    crossing the current one at the shared letter, then continues from the new word.
//! 3. When a branch cannot place the remaining words, the last word is taken back out and the
//!    next candidate is tried.
//! 4. The first arrangement that uses every word wins.
//!
//! A word is only crossed while it is the one being expanded; the search never returns to an
//! earlier word to hang more words off it. It can therefore report
//! [`GenerateError::NoSolutionFound`] for lists that some other arrangement would fit.
//!
//! # Error Handling
//!
//! - G001: `InvalidSize` (Grid size out of range)
//! - G002: `EmptyClueList` (Nothing to place)
//! - G003: `UnplaceableInitialWord` (Longest word does not fit)
//! - G004: `NoSolutionFound` (Search exhausted)
//! - G005: `TimedOut` (Time budget expired)
//!
//! # Examples
//!
//! ```
//! use mkpuzzle::clue_list::ClueList;
//! use mkpuzzle::generator;
//!
//! let clue_list = ClueList::parse_from_str("CAT feline\nCAR vehicle\nART skill")?;
//! let solution = generator::generate(&clue_list.clues, 6)?;
//! println!("{}", solution.grid);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::clue_list::Clue;
use crate::cross_index::CrossIndex;
use crate::grid::Grid;
use crate::placement::{Direction, Placement};
use instant::Instant;
use log::{debug, info, trace};
use std::cmp::Reverse;
use std::time::Duration;

/// Unified error type for puzzle generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("grid size must be between 1 and {} (got {size})", MAX_GRID_SIZE)]
    InvalidSize { size: usize },

    #[error("no clues to place")]
    EmptyClueList,

    /// The longest word could not be centered, typically because it is longer than the grid.
    #[error("cannot place initial word \"{word}\" in a {size}x{size} grid")]
    UnplaceableInitialWord { word: String, size: usize },

    /// Every branch of the search was exhausted. `placed` is the most words any branch managed.
    #[error("cannot find a solution (best attempt placed {placed} of {total} words)")]
    NoSolutionFound { placed: usize, total: usize },

    #[error("generation timed out after {:.1}s", .elapsed.as_secs_f64())]
    TimedOut { elapsed: Duration },
}

impl GenerateError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::InvalidSize { .. } => "G001",
            GenerateError::EmptyClueList => "G002",
            GenerateError::UnplaceableInitialWord { .. } => "G003",
            GenerateError::NoSolutionFound { .. } => "G004",
            GenerateError::TimedOut { .. } => "G005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GenerateError::InvalidSize { .. } => "Grid size out of range",
            GenerateError::EmptyClueList => "Nothing to place",
            GenerateError::UnplaceableInitialWord { .. } => "Longest word does not fit",
            GenerateError::NoSolutionFound { .. } => "Search exhausted",
            GenerateError::TimedOut { .. } => "Time budget expired",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GenerateError::InvalidSize { .. } => "The grid is square; its side length must be at least 1 and no more than the largest supported size.",
            GenerateError::EmptyClueList => "The generator was called with an empty clue list, so there is no word to start the grid from.",
            GenerateError::UnplaceableInitialWord { .. } => "The longest word is placed first, across the middle row. If it is longer than the grid is wide, no puzzle can be built.",
            GenerateError::NoSolutionFound { .. } => "Every crossing the generator knows how to try was attempted and none left room for all words. Words are only crossed through letters they share, so a word with no letters in common with the others can never be placed.",
            GenerateError::TimedOut { .. } => "The search ran longer than the configured time limit and was abandoned. No partial puzzle is produced.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GenerateError::InvalidSize { .. } => Some("Pass a grid size of at least the length of the longest word, and no more than 1000"),
            GenerateError::EmptyClueList => None,
            GenerateError::UnplaceableInitialWord { .. } => Some("Increase the grid size or shorten the longest word"),
            GenerateError::NoSolutionFound { .. } => Some("Try a larger grid, or add words that share letters with the ones that could not be placed"),
            GenerateError::TimedOut { .. } => Some("Raise the time limit, use a larger grid, or reduce the number of words"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Largest side length accepted for a grid.
pub const MAX_GRID_SIZE: usize = 1000;

/// Library-level generation options.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Abandon the search with [`GenerateError::TimedOut`] after this long. `None` never times out.
    pub time_budget: Option<Duration>,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls into [`Grid::try_place`] for crossing candidates.
    pub attempts: usize,
    /// Placements that succeeded locally but were taken back because the branch failed.
    pub backtracks: usize,
    /// Most words placed at once in any branch.
    pub deepest: usize,
}

/// A finished arrangement: every word has a placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub grid: Grid,
    /// One placement per clue, indexed like the clue list.
    pub placements: Vec<Placement>,
}

/// Simple helper to enforce a wall-clock time limit.
struct TimeBudget {
    start: Instant,
    limit: Duration,
}

impl TimeBudget {
    fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// Read-only context for one generation run plus the configuration it runs under.
pub struct Generator<'a> {
    clues: &'a [Clue],
    words: Vec<Vec<char>>,
    index: CrossIndex,
    size: usize,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Prepare a run over `clues` on a `size`×`size` grid.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidSize`] for a zero size or one above [`MAX_GRID_SIZE`], and [`GenerateError::EmptyClueList`] when
    /// there are no clues.
    pub fn new(clues: &'a [Clue], size: usize, config: GeneratorConfig) -> Result<Self, GenerateError> {
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(GenerateError::InvalidSize { size });
        }
        if clues.is_empty() {
            return Err(GenerateError::EmptyClueList);
        }
        debug_assert!(clues.iter().all(|c| !c.is_empty()), "clue words must be non-empty");

        let words: Vec<Vec<char>> = clues.iter().map(|c| c.word.chars().collect()).collect();
        let index = CrossIndex::build(words.iter().map(Vec::as_slice));

        Ok(Generator { clues, words, index, size, config })
    }

    /// Run the search.
    ///
    /// # Errors
    ///
    /// [`GenerateError::UnplaceableInitialWord`] if the longest word cannot be centered,
    /// [`GenerateError::NoSolutionFound`] if the search is exhausted, and
    /// [`GenerateError::TimedOut`] if a time budget is configured and runs out.
    pub fn generate(&self) -> Result<(Solution, SearchStats), GenerateError> {
        let initial = self.initial_word();
        let word = &self.words[initial];

        let placement = self
            .size
            .checked_sub(word.len())
            .map(|slack| Placement::new(self.size / 2, slack / 2, Direction::Across));
        let Some((placement, grid)) =
            placement.and_then(|p| Grid::new(self.size).try_place(p, word).map(|g| (p, g)))
        else {
            return Err(GenerateError::UnplaceableInitialWord {
                word: self.clues[initial].word.clone(),
                size: self.size,
            });
        };
        info!(
            "placed initial word {} at row {}, col {} ({} words, {}x{} grid)",
            self.clues[initial].word, placement.row, placement.col, self.words.len(), self.size, self.size
        );

        let mut search = Search {
            words: &self.words,
            index: &self.index,
            size: self.size,
            budget: self.config.time_budget.map(TimeBudget::new),
            used: vec![false; self.words.len()],
            placements: vec![None; self.words.len()],
            placed: 0,
            stats: SearchStats::default(),
        };
        search.mark(initial, placement);

        let Some(grid) = search.expand(&grid, initial, placement)? else {
            return Err(GenerateError::NoSolutionFound {
                placed: search.stats.deepest,
                total: self.words.len(),
            });
        };

        let placements = search
            .placements
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or(GenerateError::NoSolutionFound { placed: search.placed, total: self.words.len() })?;

        debug!(
            "solved after {} attempts and {} backtracks",
            search.stats.attempts, search.stats.backtracks
        );
        Ok((Solution { grid, placements }, search.stats))
    }

    /// Index of the longest word; the earliest one wins ties.
    fn initial_word(&self) -> usize {
        self.words
            .iter()
            .enumerate()
            .min_by_key(|(i, w)| (Reverse(w.len()), *i))
            .map_or(0, |(i, _)| i)
    }
}

/// Mutable state of one depth-first search.
struct Search<'a> {
    words: &'a [Vec<char>],
    index: &'a CrossIndex,
    size: usize,
    budget: Option<TimeBudget>,
    used: Vec<bool>,
    placements: Vec<Option<Placement>>,
    placed: usize,
    stats: SearchStats,
}

impl Search<'_> {
    fn mark(&mut self, word_index: usize, placement: Placement) {
        self.used[word_index] = true;
        self.placements[word_index] = Some(placement);
        self.placed += 1;
        self.stats.deepest = self.stats.deepest.max(self.placed);
    }

    fn unmark(&mut self, word_index: usize) {
        self.used[word_index] = false;
        self.placements[word_index] = None;
        self.placed -= 1;
    }

    /// Where a word crossing the current one must start so that its letter at `cand_offset`
    /// lands on the current word's letter at `letter_offset`. `None` if it would start before
    /// the first row/column or end on or past the last one.
    fn crossing_start(
        &self,
        current: Placement,
        letter_offset: usize,
        cand_offset: usize,
        cand_len: usize,
    ) -> Option<Placement> {
        let direction = current.direction.orthogonal();
        let (row, col) = match direction {
            Direction::Across => (current.row + letter_offset, current.col.checked_sub(cand_offset)?),
            Direction::Down => (current.row.checked_sub(cand_offset)?, current.col + letter_offset),
        };
        let far_end = match direction {
            Direction::Across => col + cand_len,
            Direction::Down => row + cand_len,
        };
        (far_end < self.size).then_some(Placement::new(row, col, direction))
    }

    /// Try to place every remaining word, starting from crossings of `word_index`.
    ///
    /// Returns the completed grid, or `None` if this branch cannot finish. On `None` the
    /// used/placement state is exactly as it was on entry.
    fn expand(
        &mut self,
        grid: &Grid,
        word_index: usize,
        placement: Placement,
    ) -> Result<Option<Grid>, GenerateError> {
        if self.placed == self.words.len() {
            return Ok(Some(grid.clone()));
        }

        let words = self.words;
        let index = self.index;
        for (letter_offset, &letter) in words[word_index].iter().enumerate() {
            for cand in index.candidates(letter) {
                if self.used[cand.word_index] {
                    continue;
                }
                if let Some(budget) = &self.budget {
                    if budget.expired() {
                        return Err(GenerateError::TimedOut { elapsed: budget.elapsed() });
                    }
                }

                let cand_word = &words[cand.word_index];
                let Some(cand_placement) =
                    self.crossing_start(placement, letter_offset, cand.offset, cand_word.len())
                else {
                    continue;
                };

                self.stats.attempts += 1;
                let Some(next_grid) = grid.try_place(cand_placement, cand_word) else {
                    continue;
                };

                self.mark(cand.word_index, cand_placement);
                debug!(
                    "placed word {} {} at ({}, {}), {}/{} words",
                    cand.word_index,
                    cand_placement.direction,
                    cand_placement.row,
                    cand_placement.col,
                    self.placed,
                    words.len()
                );

                if let Some(solution) = self.expand(&next_grid, cand.word_index, cand_placement)? {
                    return Ok(Some(solution));
                }

                self.unmark(cand.word_index);
                self.stats.backtracks += 1;
                trace!("backtracked word {}", cand.word_index);
            }
        }

        Ok(None)
    }
}

/// Generate a puzzle with the default configuration.
///
/// # Errors
///
/// See [`Generator::new`] and [`Generator::generate`].
pub fn generate(clues: &[Clue], size: usize) -> Result<Solution, GenerateError> {
    let generator = Generator::new(clues, size, GeneratorConfig::default())?;
    generator.generate().map(|(solution, _)| solution)
}
