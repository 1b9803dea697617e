//! Shared word dictionary
//!
//! The dictionary is loaded once, never mutated, and shared by reference
//! across games. Its order is semantically significant: guess-selection
//! tie-breaks resolve to the first word encountered, so the source-file
//! order determines which of two equally scored guesses wins.

use super::Word;

/// Immutable ordered collection of words
///
/// Safe to share across concurrently running games - all access is read-only.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from an already-validated word list, preserving order
    #[must_use]
    pub const fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the dictionary holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in load order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(texts: &[&str]) -> Dictionary {
        Dictionary::from_words(texts.iter().map(|t| Word::new(*t).unwrap()).collect())
    }

    #[test]
    fn preserves_insertion_order() {
        let dict = dictionary(&["slate", "crane", "audio"]);
        let texts: Vec<&str> = dict.iter().map(Word::text).collect();
        assert_eq!(texts, ["SLATE", "CRANE", "AUDIO"]);
    }

    #[test]
    fn len_and_empty() {
        assert!(Dictionary::default().is_empty());

        let dict = dictionary(&["crane"]);
        assert_eq!(dict.len(), 1);
        assert!(!dict.is_empty());
    }
}
