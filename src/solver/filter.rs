//! Constraint compatibility test
//!
//! Decides whether a candidate word could still be the target given one
//! observed (guess, pattern) step. The candidate pool is narrowed each turn
//! by retaining only compatible words.

use crate::core::{Feedback, Pattern, WORD_LEN, Word};

/// Check whether `word` is consistent with the feedback `pattern` observed
/// for `guess`
///
/// Per position:
/// - Green: `word` must carry the same letter at that position.
/// - Yellow: `word` must not carry it at that position but must contain it
///   somewhere.
/// - Grey: the letter must be absent from `word` entirely, unless the same
///   letter scored Green or Yellow at another position of the guess, in
///   which case the Grey only signals "no additional occurrences" and the
///   per-letter count check below applies instead.
///
/// On top of the positional checks, every Yellow letter imposes a count
/// floor: `word` must contain the letter at least as many times as it
/// appears non-Grey in the guess.
///
/// The Grey branch intentionally does not derive an exact occurrence count
/// for letters that are simultaneously Green/Yellow and Grey in one guess;
/// it must stay in lockstep with what [`Pattern::compute`] actually
/// generates.
#[must_use]
pub fn is_compatible(word: &Word, guess: &Word, pattern: &Pattern) -> bool {
    let symbols = pattern.symbols();

    for i in 0..WORD_LEN {
        let letter = guess.char_at(i);
        match symbols[i] {
            Feedback::Green => {
                if word.char_at(i) != letter {
                    return false;
                }
            }
            Feedback::Yellow => {
                if word.char_at(i) == letter {
                    return false;
                }
                if !word.has_letter(letter) {
                    return false;
                }
            }
            Feedback::Grey => {
                let scored_elsewhere = (0..WORD_LEN).any(|j| {
                    j != i && guess.char_at(j) == letter && symbols[j] != Feedback::Grey
                });
                if !scored_elsewhere && word.has_letter(letter) {
                    return false;
                }
            }
        }
    }

    // Count floor for yellow letters with duplicates
    for i in 0..WORD_LEN {
        if symbols[i] != Feedback::Yellow {
            continue;
        }
        let letter = guess.char_at(i);
        let guess_count = (0..WORD_LEN)
            .filter(|&j| guess.char_at(j) == letter && symbols[j] != Feedback::Grey)
            .count();
        if word.count_of(letter) < guess_count {
            return false;
        }
    }

    true
}
