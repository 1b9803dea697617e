//! Feedback pattern computation and representation
//!
//! A `Pattern` is the ordered 5-symbol result of comparing a guess to a
//! target. Patterns are only ever produced by [`Pattern::compute`], which
//! implements the canonical two-pass rule for duplicate letters: greens are
//! matched and consumed first, then each remaining guess letter claims the
//! leftmost unconsumed matching answer letter for a yellow.

use super::word::{WORD_LEN, Word};
use std::fmt;

/// One position's worth of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter, correct position
    Green,
    /// Letter present in target, wrong position (duplicate-count rules apply)
    Yellow,
    /// Letter absent at this position, and absent entirely unless the same
    /// letter scored Green or Yellow elsewhere in the guess
    Grey,
}

impl Feedback {
    /// The boundary vocabulary: `"green"`, `"yellow"`, or `"grey"`
    ///
    /// These exact strings are what external consumers of game records see.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Grey => "grey",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered feedback for all five positions of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Feedback; WORD_LEN]);

impl Pattern {
    /// All greens (the guess was the target)
    pub const ALL_GREEN: Self = Self([Feedback::Green; WORD_LEN]);

    /// Compute the feedback pattern for a (guess, answer) pair
    ///
    /// Two passes:
    /// 1. Mark greens and consume the matched answer positions.
    /// 2. For each non-green guess letter, scan unconsumed answer positions
    ///    left to right; a match yields Yellow and consumes that position,
    ///    otherwise the slot stays Grey.
    ///
    /// Pure and deterministic. The same rule scores candidate guesses against
    /// the pool and produces the true feedback against the secret target.
    ///
    /// # Examples
    /// ```
    /// use wordle_infogain::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::compute(&guess, &answer);
    ///
    /// // C(grey) R(grey) A(green) N(grey) E(green)
    /// assert_eq!(pattern.symbols()[2], Feedback::Green);
    /// assert_eq!(pattern.symbols()[4], Feedback::Green);
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, answer: &Word) -> Self {
        let mut result = [Feedback::Grey; WORD_LEN];
        let mut consumed = [false; WORD_LEN];

        // First pass: greens consume their answer position
        for i in 0..WORD_LEN {
            if guess.char_at(i) == answer.char_at(i) {
                result[i] = Feedback::Green;
                consumed[i] = true;
            }
        }

        // Second pass: yellows claim the leftmost unconsumed match
        for i in 0..WORD_LEN {
            if result[i] == Feedback::Green {
                continue;
            }
            let letter = guess.char_at(i);
            for j in 0..WORD_LEN {
                if !consumed[j] && answer.char_at(j) == letter {
                    result[i] = Feedback::Yellow;
                    consumed[j] = true;
                    break;
                }
            }
        }

        Self(result)
    }

    /// The five feedback symbols in guess-position order
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Feedback; WORD_LEN] {
        &self.0
    }

    /// Check if every position is Green
    #[inline]
    #[must_use]
    pub fn is_all_green(&self) -> bool {
        self.0.iter().all(|&s| s == Feedback::Green)
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|s| match s {
                Feedback::Green => '🟩',
                Feedback::Yellow => '🟨',
                Feedback::Grey => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    /// Compact form: `G` green, `Y` yellow, `-` grey
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            let ch = match symbol {
                Feedback::Green => 'G',
                Feedback::Yellow => 'Y',
                Feedback::Grey => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
