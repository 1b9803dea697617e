//! Adaptive guess selection
//!
//! Chooses which words are worth scoring for the next guess, then returns
//! the arg-max of the scoring heuristic. The evaluation pool adapts to the
//! candidate count: a capped dictionary prefix for wide-open games, the full
//! dictionary mid-game, and a targeted distinguishing-word search when
//! exactly two candidates remain.

use super::{LetterTracker, ScoringConfig, score_guess};
use crate::core::{Dictionary, LetterSet, WORD_LEN, Word};

/// Selects the next guess for one game
///
/// Holds only the shared dictionary and the heuristic weights; all per-game
/// state arrives through the arguments.
#[derive(Debug, Clone, Copy)]
pub struct GuessSelector<'d> {
    dictionary: &'d Dictionary,
    config: ScoringConfig,
}

impl<'d> GuessSelector<'d> {
    /// Create a selector over the shared dictionary
    #[must_use]
    pub const fn new(dictionary: &'d Dictionary, config: ScoringConfig) -> Self {
        Self { dictionary, config }
    }

    /// Pick the best next guess for the given candidate pool
    ///
    /// Candidates are dictionary indices. Returns `None` when the pool is
    /// empty. A singleton pool short-circuits to its only word without
    /// scoring. Ties resolve to the first word encountered in dictionary
    /// order - selection is fully deterministic.
    #[must_use]
    pub fn select_best(
        &self,
        candidates: &[u32],
        tracker: &LetterTracker,
    ) -> Option<&'d Word> {
        let words = self.dictionary.words();

        match candidates.len() {
            0 => None,
            1 => Some(&words[candidates[0] as usize]),
            _ => {
                let pool: Vec<&Word> = candidates.iter().map(|&i| &words[i as usize]).collect();

                let mut best: Option<(&'d Word, f64)> = None;
                for guess in self.evaluation_pool(candidates) {
                    let score = score_guess(guess, &pool, tracker, &self.config);
                    if best.is_none_or(|(_, top)| score > top) {
                        best = Some((guess, score));
                    }
                }
                best.map(|(guess, _)| guess)
            }
        }
    }

    /// Decide which words to score for the current pool size
    ///
    /// - More than `full_scan_max_pool` candidates: the first
    ///   `capped_pool_len` dictionary words. A deliberate performance cap
    ///   that accepts possible sub-optimality.
    /// - Exactly two candidates: distinguishing words, falling back to the
    ///   full dictionary when none qualify.
    /// - Otherwise: the entire dictionary.
    fn evaluation_pool(&self, candidates: &[u32]) -> Vec<&'d Word> {
        let words = self.dictionary.words();

        if candidates.len() > self.config.full_scan_max_pool {
            let cap = self.config.capped_pool_len.min(words.len());
            return words[..cap].iter().collect();
        }

        if candidates.len() == 2 {
            let first = &words[candidates[0] as usize];
            let second = &words[candidates[1] as usize];
            let distinguishing = self.distinguishing_words(first, second);
            if !distinguishing.is_empty() {
                return distinguishing;
            }
        }

        words.iter().collect()
    }

    /// Words that can separate two remaining candidates
    ///
    /// The letters at positions where the two candidates differ form the
    /// discriminator set; eligible guesses contain at least one discriminator
    /// and have five distinct letters for maximal coverage.
    #[must_use]
    pub fn distinguishing_words(&self, first: &Word, second: &Word) -> Vec<&'d Word> {
        let mut discriminators = LetterSet::EMPTY;
        for i in 0..WORD_LEN {
            if first.char_at(i) != second.char_at(i) {
                discriminators.insert(first.char_at(i));
                discriminators.insert(second.char_at(i));
            }
        }

        self.dictionary
            .iter()
            .filter(|w| {
                w.letters().intersects(discriminators) && w.distinct_letter_count() == WORD_LEN
            })
            .collect()
    }
}
