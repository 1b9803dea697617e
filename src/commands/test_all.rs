//! Batch solver evaluation
//!
//! Runs an independent game for every target word in the dictionary (or a
//! limited prefix of it). Games share nothing, so they run in parallel; the
//! result vector keeps dictionary order regardless of completion order.

use crate::core::Dictionary;
use crate::solver::{GameResult, SolveError, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Results and wall-clock time of one batch run
#[derive(Debug)]
pub struct BatchRun {
    /// One result per target, in dictionary order
    pub results: Vec<GameResult>,
    pub elapsed: Duration,
}

/// Solve every dictionary word as the hidden answer
///
/// `limit` caps the run to the first N dictionary words. Each game gets a
/// fresh solver over the full dictionary.
///
/// # Errors
///
/// Returns [`SolveError::EmptyDictionary`] if the dictionary has no words.
pub fn run_test_all(
    dictionary: &Dictionary,
    limit: Option<usize>,
    max_guesses: usize,
) -> Result<BatchRun, SolveError> {
    if dictionary.is_empty() {
        return Err(SolveError::EmptyDictionary);
    }

    let targets: Vec<_> = dictionary
        .iter()
        .take(limit.unwrap_or(dictionary.len()))
        .collect();

    println!("🎯 Testing {} words...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let completed = AtomicUsize::new(0);
    let guess_total = AtomicUsize::new(0);

    let start = Instant::now();

    let results: Result<Vec<GameResult>, SolveError> = targets
        .par_iter()
        .map(|target| {
            let mut solver = Solver::new(dictionary);
            let result = solver.solve(target, max_guesses)?;

            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            let total = guess_total.fetch_add(result.guesses, Ordering::Relaxed) + result.guesses;
            if done % 64 == 0 {
                pb.set_message(format!("Avg: {:.2}", total as f64 / done as f64));
            }
            pb.inc(1);

            Ok(result)
        })
        .collect();

    let elapsed = start.elapsed();
    pb.finish_with_message("Complete!");

    Ok(BatchRun {
        results: results?,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::dictionary_from_slice;

    #[test]
    fn empty_dictionary_is_an_error() {
        let dict = Dictionary::from_words(Vec::new());
        assert!(run_test_all(&dict, None, 6).is_err());
    }

    #[test]
    fn limit_caps_the_target_list() {
        let dict = dictionary_from_slice(&["CRANE", "SLATE", "IRATE", "GRATE"]);

        let run = run_test_all(&dict, Some(2), 6).unwrap();

        assert_eq!(run.results.len(), 2);
        assert_eq!(run.results[0].target, "CRANE");
        assert_eq!(run.results[1].target, "SLATE");
    }

    #[test]
    fn results_keep_dictionary_order() {
        let dict = dictionary_from_slice(&["CRANE", "SLATE", "IRATE"]);

        let run = run_test_all(&dict, None, 6).unwrap();

        let targets: Vec<&str> = run.results.iter().map(|r| r.target.as_str()).collect();
        assert_eq!(targets, ["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn every_game_terminates_within_budget() {
        let dict = dictionary_from_slice(&[
            "CRANE", "SLATE", "IRATE", "GRATE", "TRACE", "BRACE", "PLACE", "PLANE",
        ]);

        let run = run_test_all(&dict, None, 6).unwrap();

        for result in &run.results {
            assert!(result.guesses <= 6);
            assert!(result.success || result.guesses == 6);
        }
    }
}
