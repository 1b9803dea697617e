//! Guess scoring heuristic
//!
//! Scores one candidate guess against the current candidate pool and letter
//! tracker. The primary signal is expected pool reduction; letter-coverage
//! bonuses and penalties steer early guesses toward untested letters.

use super::LetterTracker;
use crate::core::{Pattern, WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// Tunable weights and thresholds of the solving heuristic
///
/// The defaults are the published weights; each knob is independently
/// testable.
#[derive(Debug, Clone, Copy)]
pub struct ScoringConfig {
    /// Bonus per never-before-tested letter in the guess (default: 2.0)
    pub new_letter_bonus: f64,
    /// Penalty per repeated letter when the pool is still large (default: 1.5)
    pub repeat_letter_penalty: f64,
    /// Penalty per guess letter already confirmed absent (default: 5.0)
    pub excluded_letter_penalty: f64,
    /// The repeat-letter penalty only applies while the candidate pool is
    /// larger than this (default: 10)
    pub repeat_penalty_min_pool: usize,
    /// Above this many candidates, only a capped dictionary prefix is scored
    /// (default: 50)
    pub full_scan_max_pool: usize,
    /// Length of the capped dictionary prefix (default: 1000)
    pub capped_pool_len: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            new_letter_bonus: 2.0,
            repeat_letter_penalty: 1.5,
            excluded_letter_penalty: 5.0,
            repeat_penalty_min_pool: 10,
            full_scan_max_pool: 50,
            capped_pool_len: 1000,
        }
    }
}

/// Score a guess against the candidate pool
///
/// Returns the expected information gain adjusted by letter-coverage terms:
///
/// 1. Pools of one or zero candidates score 0 - no information possible.
/// 2. Candidates are partitioned by the pattern the guess would produce;
///    the expected remaining pool is Σ (|group|/|pool|)·|group| and the base
///    gain is |pool| minus that.
/// 3. Plus `new_letter_bonus` per untested letter.
/// 4. Minus `repeat_letter_penalty` per repeated letter, but only while more
///    than `repeat_penalty_min_pool` candidates remain.
/// 5. Minus `excluded_letter_penalty` per letter already ruled out.
///
/// Scores may be negative; only relative ordering matters.
#[must_use]
pub fn score_guess(
    guess: &Word,
    pool: &[&Word],
    tracker: &LetterTracker,
    config: &ScoringConfig,
) -> f64 {
    if pool.len() <= 1 {
        return 0.0;
    }

    // Partition the pool by feedback pattern
    let mut groups: FxHashMap<Pattern, usize> = FxHashMap::default();
    for candidate in pool {
        let pattern = Pattern::compute(guess, candidate);
        *groups.entry(pattern).or_insert(0) += 1;
    }

    let pool_size = pool.len() as f64;
    let expected_remaining: f64 = groups
        .values()
        .map(|&count| (count as f64 / pool_size) * count as f64)
        .sum();

    let mut score = pool_size - expected_remaining;

    // Reward probing letters we have never tried
    let new_letters = guess.letters().difference(tracker.tested());
    score += config.new_letter_bonus * new_letters.len() as f64;

    // Discourage duplicate letters while the pool is still wide open
    let distinct = guess.distinct_letter_count();
    if distinct < WORD_LEN && pool.len() > config.repeat_penalty_min_pool {
        score -= config.repeat_letter_penalty * (WORD_LEN - distinct) as f64;
    }

    // Strongly discourage letters already confirmed absent
    let excluded_used = guess.letters().intersection(tracker.excluded());
    score -= config.excluded_letter_penalty * excluded_used.len() as f64;

    score
}
