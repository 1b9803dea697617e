//! Game driver and state machine
//!
//! Runs one game: repeatedly picks a guess, computes the true feedback
//! against the secret target, narrows the candidate pool, and decides
//! success or failure. A failed game is a normal, reportable outcome, not
//! an error.

use super::{GuessSelector, LetterTracker, ScoringConfig, is_compatible};
use crate::core::{Dictionary, Pattern, Word};
use std::fmt;

/// Default attempt budget per game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Phase of a running game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Still narrowing the candidate pool
    Searching,
    /// Target identified within the attempt budget
    Solved,
    /// Attempt budget spent, or no guess could be produced
    Exhausted,
}

/// One step of game history: the guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub pattern: Pattern,
}

/// Outcome record of one game, consumed by external statistics and
/// reporting collaborators
#[derive(Debug, Clone)]
pub struct GameResult {
    pub success: bool,
    pub guesses: usize,
    pub history: Vec<GuessRecord>,
    pub final_candidate_count: usize,
    pub target: String,
}

/// Error starting a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The dictionary holds no words, so no guess can ever be produced
    EmptyDictionary,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDictionary => write!(f, "dictionary contains no words"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Solver for successive games over one shared dictionary
///
/// Per-game state (candidate pool, letter tracker, history) is rebuilt by
/// [`Solver::solve`]; nothing carries over between games. Concurrent games
/// each own a `Solver` and share the `Dictionary` by reference.
pub struct Solver<'d> {
    dictionary: &'d Dictionary,
    selector: GuessSelector<'d>,
    candidates: Vec<u32>,
    tracker: LetterTracker,
    history: Vec<GuessRecord>,
}

impl<'d> Solver<'d> {
    /// Create a solver with default heuristic weights
    #[must_use]
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self::with_config(dictionary, ScoringConfig::default())
    }

    /// Create a solver with custom heuristic weights
    #[must_use]
    pub fn with_config(dictionary: &'d Dictionary, config: ScoringConfig) -> Self {
        Self {
            dictionary,
            selector: GuessSelector::new(dictionary, config),
            candidates: Vec::new(),
            tracker: LetterTracker::new(),
            history: Vec::new(),
        }
    }

    /// Words still consistent with every observed pattern
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Reset per-game state: full candidate pool, empty tracker and history
    fn reset(&mut self) {
        self.candidates = (0..self.dictionary.len() as u32).collect();
        self.tracker = LetterTracker::new();
        self.history.clear();
    }

    /// Play one game against `target`
    ///
    /// Loops up to `max_guesses` times. Two success paths exist with
    /// different counting conventions, both preserved deliberately:
    /// - pool already narrowed to the target before guessing records the
    ///   number of guesses issued so far,
    /// - an exact hit mid-loop records that guess as well.
    ///
    /// Running out of attempts, or out of eligible guesses, yields an
    /// `Exhausted` result with `success: false`.
    ///
    /// # Errors
    /// Returns `SolveError::EmptyDictionary` when the dictionary is empty.
    pub fn solve(
        &mut self,
        target: &Word,
        max_guesses: usize,
    ) -> Result<GameResult, SolveError> {
        if self.dictionary.is_empty() {
            return Err(SolveError::EmptyDictionary);
        }

        self.reset();

        let mut state = GameState::Searching;
        let mut guesses_used = 0;

        for step in 0..max_guesses {
            // Pool narrowed to the target without guessing it yet
            if self.candidates.len() == 1
                && &self.dictionary.words()[self.candidates[0] as usize] == target
            {
                state = GameState::Solved;
                guesses_used = step;
                break;
            }

            let Some(best) = self.selector.select_best(&self.candidates, &self.tracker) else {
                state = GameState::Exhausted;
                break;
            };

            let pattern = Pattern::compute(best, target);
            self.history.push(GuessRecord {
                guess: best.clone(),
                pattern,
            });

            if best == target {
                state = GameState::Solved;
                guesses_used = step + 1;
                break;
            }

            self.tracker.record(best, &pattern);
            let words = self.dictionary.words();
            self.candidates
                .retain(|&i| is_compatible(&words[i as usize], best, &pattern));
        }

        let history = std::mem::take(&mut self.history);
        let result = match state {
            GameState::Solved => GameResult {
                success: true,
                guesses: guesses_used,
                history,
                final_candidate_count: 1,
                target: target.text().to_string(),
            },
            GameState::Searching | GameState::Exhausted => GameResult {
                success: false,
                guesses: max_guesses,
                history,
                final_candidate_count: self.candidates.len(),
                target: target.text().to_string(),
            },
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(texts: &[&str]) -> Dictionary {
        Dictionary::from_words(texts.iter().map(|t| Word::new(*t).unwrap()).collect())
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let dict = Dictionary::default();
        let mut solver = Solver::new(&dict);
        let target = Word::new("crane").unwrap();

        let result = solver.solve(&target, DEFAULT_MAX_GUESSES);
        assert_eq!(result.unwrap_err(), SolveError::EmptyDictionary);
    }

    #[test]
    fn three_word_scenario_solves_immediately() {
        // All three words tie at the top score; the dictionary-order
        // tie-break picks ABCDE, which is the target
        let dict = dictionary(&["abcde", "abcdf", "fghij"]);
        let mut solver = Solver::new(&dict);
        let target = Word::new("abcde").unwrap();

        let result = solver.solve(&target, DEFAULT_MAX_GUESSES).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses, 1);
        assert_eq!(result.history.len(), 1);
        assert_eq!(result.history[0].guess.text(), "ABCDE");
        assert!(result.history[0].pattern.is_all_green());
        assert_eq!(result.final_candidate_count, 1);
        assert_eq!(result.target, "ABCDE");
    }

    #[test]
    fn singleton_dictionary_counts_zero_guesses() {
        // The pre-loop success path reports the guesses issued before the
        // check: none here
        let dict = dictionary(&["crane"]);
        let mut solver = Solver::new(&dict);
        let target = Word::new("crane").unwrap();

        let result = solver.solve(&target, DEFAULT_MAX_GUESSES).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses, 0);
        assert!(result.history.is_empty());
        assert_eq!(result.final_candidate_count, 1);
    }

    #[test]
    fn target_outside_dictionary_exhausts() {
        let dict = dictionary(&["aaaaa", "bbbbb"]);
        let mut solver = Solver::new(&dict);
        let target = Word::new("ccccc").unwrap();

        let result = solver.solve(&target, DEFAULT_MAX_GUESSES).unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses, DEFAULT_MAX_GUESSES);
    }

    #[test]
    fn terminates_within_budget_for_every_target() {
        let dict = dictionary(&[
            "crane", "slate", "irate", "grate", "trace", "brace", "place", "plant", "mount",
            "moist",
        ]);

        for target in dict.words() {
            let mut solver = Solver::new(&dict);
            let result = solver.solve(target, DEFAULT_MAX_GUESSES).unwrap();
            // Always reaches Solved or Exhausted within the budget
            assert!(result.history.len() <= DEFAULT_MAX_GUESSES);
            assert!(result.success || result.guesses == DEFAULT_MAX_GUESSES);
        }
    }

    #[test]
    fn candidate_pool_shrinks_monotonically() {
        let dict = dictionary(&[
            "crane", "slate", "irate", "grate", "trace", "brace", "place", "shale", "whale",
            "blame",
        ]);
        let target = Word::new("whale").unwrap();

        let mut solver = Solver::new(&dict);
        let result = solver.solve(&target, DEFAULT_MAX_GUESSES).unwrap();

        // Replay the history and check the pool only ever shrinks
        let mut pool: Vec<&Word> = dict.words().iter().collect();
        for record in &result.history {
            let before = pool.len();
            pool.retain(|w| is_compatible(w, &record.guess, &record.pattern));
            assert!(pool.len() <= before);
        }
    }

    #[test]
    fn identical_runs_produce_identical_history() {
        let dict = dictionary(&[
            "crane", "slate", "irate", "grate", "trace", "brace", "place", "shale",
        ]);
        let target = Word::new("grate").unwrap();

        let mut first_solver = Solver::new(&dict);
        let first = first_solver.solve(&target, DEFAULT_MAX_GUESSES).unwrap();
        let mut second_solver = Solver::new(&dict);
        let second = second_solver.solve(&target, DEFAULT_MAX_GUESSES).unwrap();

        assert_eq!(first.history, second.history);
        assert_eq!(first.guesses, second.guesses);
    }

    #[test]
    fn one_guess_budget_still_terminates() {
        let dict = dictionary(&["crane", "slate", "irate"]);
        let target = Word::new("irate").unwrap();

        let mut solver = Solver::new(&dict);
        let result = solver.solve(&target, 1).unwrap();

        assert!(result.history.len() <= 1);
        assert!(result.success || result.guesses == 1);
    }

    #[test]
    fn solver_reuse_resets_state() {
        let dict = dictionary(&["crane", "slate", "irate", "grate"]);
        let mut solver = Solver::new(&dict);

        let first_target = Word::new("slate").unwrap();
        let first = solver.solve(&first_target, DEFAULT_MAX_GUESSES).unwrap();

        let second_target = Word::new("grate").unwrap();
        let second = solver.solve(&second_target, DEFAULT_MAX_GUESSES).unwrap();

        // A fresh solver produces the same second game: no leaked state
        let mut fresh = Solver::new(&dict);
        let reference = fresh.solve(&second_target, DEFAULT_MAX_GUESSES).unwrap();
        assert_eq!(second.history, reference.history);
        assert!(first.success);
    }
}
