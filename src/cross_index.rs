//! Letter → (word, offset) lookup used to find crossing candidates.

use std::collections::HashMap;

/// Position of a letter inside one of the words being placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterRef {
    /// Index of the word in the clue list.
    pub word_index: usize,
    /// Offset of the letter inside that word.
    pub offset: usize,
}

/// For every letter, all places it occurs across the word list.
///
/// Entries are stored in word-list order, then in position order within each word. The
/// generator tries crossing candidates in exactly this order, so it is what makes the search
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct CrossIndex {
    by_letter: HashMap<char, Vec<LetterRef>>,
}

impl CrossIndex {
    /// Build the index from the words in list order.
    pub fn build<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a [char]>,
    {
        let mut by_letter: HashMap<char, Vec<LetterRef>> = HashMap::new();
        for (word_index, word) in words.into_iter().enumerate() {
            for (offset, &letter) in word.iter().enumerate() {
                by_letter.entry(letter).or_default().push(LetterRef { word_index, offset });
            }
        }
        CrossIndex { by_letter }
    }

    /// Every occurrence of `letter`, or an empty slice if no word contains it.
    #[must_use]
    pub fn candidates(&self, letter: char) -> &[LetterRef] {
        self.by_letter.get(&letter).map(Vec::as_slice).unwrap_or_default()
    }
}
