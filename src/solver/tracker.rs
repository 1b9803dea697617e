//! Per-game letter bookkeeping
//!
//! Tracks which letters have been tried and what the feedback said about
//! them. Derived incrementally from each guess record and never rolled back;
//! a fresh tracker is created for every game.

use crate::core::{Feedback, LetterSet, Pattern, WORD_LEN, Word};

/// Letter knowledge accumulated over one game
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterTracker {
    tested: LetterSet,
    known: LetterSet,
    excluded: LetterSet,
}

impl LetterTracker {
    /// Fresh tracker with no knowledge
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one (guess, pattern) step into the tracked sets
    ///
    /// Every guessed letter becomes tested. Green/Yellow letters become
    /// known. A Grey letter is excluded only when the same letter did not
    /// score Green or Yellow at another position of this guess - otherwise
    /// the Grey merely capped a duplicate.
    pub fn record(&mut self, guess: &Word, pattern: &Pattern) {
        let symbols = pattern.symbols();

        for i in 0..WORD_LEN {
            let letter = guess.char_at(i);
            self.tested.insert(letter);

            match symbols[i] {
                Feedback::Green | Feedback::Yellow => self.known.insert(letter),
                Feedback::Grey => {
                    let scored_elsewhere = (0..WORD_LEN).any(|j| {
                        j != i && guess.char_at(j) == letter && symbols[j] != Feedback::Grey
                    });
                    if !scored_elsewhere {
                        self.excluded.insert(letter);
                    }
                }
            }
        }
    }

    /// Letters that appeared in any guess so far
    #[inline]
    #[must_use]
    pub const fn tested(&self) -> LetterSet {
        self.tested
    }

    /// Letters confirmed present in the target (Green or Yellow anywhere)
    #[inline]
    #[must_use]
    pub const fn known(&self) -> LetterSet {
        self.known
    }

    /// Letters confirmed absent from the target
    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn all_guessed_letters_become_tested() {
        let mut tracker = LetterTracker::new();
        let guess = word("crane");
        let pattern = Pattern::compute(&guess, &word("slate"));

        tracker.record(&guess, &pattern);

        assert_eq!(tracker.tested().len(), 5);
        assert!(tracker.tested().contains(b'C'));
        assert!(tracker.tested().contains(b'E'));
        assert!(!tracker.tested().contains(b'Z'));
    }

    #[test]
    fn green_and_yellow_become_known() {
        let mut tracker = LetterTracker::new();
        let guess = word("crane");
        // vs SLATE: A and E green, rest grey
        tracker.record(&guess, &Pattern::compute(&guess, &word("slate")));

        assert!(tracker.known().contains(b'A'));
        assert!(tracker.known().contains(b'E'));
        assert!(!tracker.known().contains(b'C'));
    }

    #[test]
    fn grey_letters_become_excluded() {
        let mut tracker = LetterTracker::new();
        let guess = word("crane");
        tracker.record(&guess, &Pattern::compute(&guess, &word("slate")));

        assert!(tracker.excluded().contains(b'C'));
        assert!(tracker.excluded().contains(b'R'));
        assert!(tracker.excluded().contains(b'N'));
        assert!(!tracker.excluded().contains(b'A'));
    }

    #[test]
    fn duplicate_grey_not_excluded_when_scored_elsewhere() {
        let mut tracker = LetterTracker::new();
        // SPEED vs EXITS: first E yellow, second E grey - E is in the target
        let guess = word("speed");
        tracker.record(&guess, &Pattern::compute(&guess, &word("exits")));

        assert!(tracker.known().contains(b'E'));
        assert!(!tracker.excluded().contains(b'E'));
        assert!(tracker.excluded().contains(b'P'));
        assert!(tracker.excluded().contains(b'D'));
    }

    #[test]
    fn knowledge_accumulates_across_guesses() {
        let mut tracker = LetterTracker::new();

        let first = word("crane");
        tracker.record(&first, &Pattern::compute(&first, &word("slate")));
        let second = word("moist");
        tracker.record(&second, &Pattern::compute(&second, &word("slate")));

        assert_eq!(tracker.tested().len(), 10);
        // S and T discovered by the second guess
        assert!(tracker.known().contains(b'S'));
        assert!(tracker.known().contains(b'T'));
        // Earlier knowledge retained
        assert!(tracker.excluded().contains(b'C'));
    }
}
