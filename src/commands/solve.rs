//! Single-word solving command
//!
//! Thin wrapper around the solver state machine: validates the target,
//! plays one game, and hands the result back for display.

use crate::core::{Dictionary, Word};
use crate::solver::{DEFAULT_MAX_GUESSES, GameResult, Solver};

/// Configuration for solving one word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// Solve one target word against the given dictionary
///
/// # Errors
///
/// Returns an error if the target is not a valid five-letter word or the
/// dictionary is empty.
pub fn solve_word(dictionary: &Dictionary, config: &SolveConfig) -> Result<GameResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    let mut solver = Solver::new(dictionary);
    solver
        .solve(&target, config.max_guesses)
        .map_err(|e| e.to_string())
}
