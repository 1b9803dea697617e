//! Descriptive statistics over batch results
//!
//! Consumes per-game result records and produces the summary a report needs:
//! central tendency, spread, distribution shape, failure analysis, and
//! efficiency metrics. Guess statistics are computed over successful games;
//! efficiency metrics include failures.

use crate::solver::GameResult;
use std::collections::HashMap;

/// Percentile levels reported for the guess distribution
pub const PERCENTILE_LEVELS: [u8; 7] = [10, 25, 50, 75, 90, 95, 99];

/// Statistics of the guess counts of successful games
#[derive(Debug, Clone, Default)]
pub struct GuessStatistics {
    pub mean: f64,
    pub median: f64,
    pub mode: usize,
    pub std_dev: f64,
    pub variance: f64,
    pub min: usize,
    pub max: usize,
    pub range: usize,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    /// (level, value) pairs for [`PERCENTILE_LEVELS`]
    pub percentiles: Vec<(u8, f64)>,
    pub skewness: f64,
    pub kurtosis: f64,
}

/// Breakdown of the games that were not solved
#[derive(Debug, Clone, Default)]
pub struct FailureAnalysis {
    pub total: usize,
    pub rate: f64,
    pub average_remaining: f64,
    /// Hardest targets by remaining candidate count, descending, capped at 10
    pub hardest: Vec<(String, usize)>,
}

/// Aggregate guess-budget usage, failures included
#[derive(Debug, Clone, Default)]
pub struct EfficiencyMetrics {
    pub total_guesses: usize,
    pub average_per_word: f64,
    /// Percentage of the one-guess-per-word theoretical minimum
    pub efficiency_ratio: f64,
}

/// Complete statistical summary of one batch run
#[derive(Debug, Clone, Default)]
pub struct BatchStatistics {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub success_rate: f64,
    pub guess_stats: GuessStatistics,
    /// Successful games per guess count
    pub distribution: HashMap<usize, usize>,
    pub failures: FailureAnalysis,
    pub efficiency: EfficiencyMetrics,
}

impl BatchStatistics {
    /// Summarize a batch of game results
    #[must_use]
    pub fn from_results(results: &[GameResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let mut guess_counts: Vec<usize> = results
            .iter()
            .filter(|r| r.success)
            .map(|r| r.guesses)
            .collect();
        guess_counts.sort_unstable();

        let solved = guess_counts.len();
        let failed = results.len() - solved;

        let mut distribution: HashMap<usize, usize> = HashMap::new();
        for &count in &guess_counts {
            *distribution.entry(count).or_insert(0) += 1;
        }

        let failures = analyze_failures(results, failed);
        let efficiency = analyze_efficiency(results);

        Self {
            total_games: results.len(),
            solved,
            failed,
            success_rate: solved as f64 / results.len() as f64 * 100.0,
            guess_stats: GuessStatistics::from_sorted(&guess_counts),
            distribution,
            failures,
            efficiency,
        }
    }

    /// Successful games solved in exactly `count` guesses
    #[must_use]
    pub fn solved_in(&self, count: usize) -> usize {
        self.distribution.get(&count).copied().unwrap_or(0)
    }

    /// Percentage of successful games solved in at most `count` guesses
    #[must_use]
    pub fn solved_within_pct(&self, count: usize) -> f64 {
        if self.solved == 0 {
            return 0.0;
        }
        let within: usize = (0..=count).map(|c| self.solved_in(c)).sum();
        within as f64 / self.solved as f64 * 100.0
    }
}

impl GuessStatistics {
    /// Compute guess statistics from an ascending-sorted count list
    #[must_use]
    pub fn from_sorted(sorted: &[usize]) -> Self {
        if sorted.is_empty() {
            return Self::default();
        }

        let values: Vec<f64> = sorted.iter().map(|&c| c as f64).collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let variance = if values.len() > 1 {
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();

        let q1 = percentile(&values, 25.0);
        let q3 = percentile(&values, 75.0);
        let percentiles = PERCENTILE_LEVELS
            .iter()
            .map(|&p| (p, percentile(&values, f64::from(p))))
            .collect();

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];

        Self {
            mean,
            median: percentile(&values, 50.0),
            mode: mode(sorted),
            std_dev,
            variance,
            min,
            max,
            range: max - min,
            q1,
            q3,
            iqr: q3 - q1,
            percentiles,
            skewness: skewness(&values, mean, std_dev),
            kurtosis: kurtosis(&values, mean, std_dev),
        }
    }
}

/// Linearly interpolated percentile of ascending-sorted data
#[must_use]
pub fn percentile(sorted: &[f64], level: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = level / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;

    sorted[lower] + fraction * (sorted[upper] - sorted[lower])
}

/// Most frequent value; ties resolve to the smallest
fn mode(sorted: &[usize]) -> usize {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for &value in sorted {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by(|(va, ca), (vb, cb)| ca.cmp(cb).then(vb.cmp(va)))
        .map_or(0, |(value, _)| value)
}

/// Sample skewness: zero for fewer than 3 values or zero spread
fn skewness(values: &[f64], mean: f64, std_dev: f64) -> f64 {
    if values.len() < 3 || std_dev == 0.0 {
        return 0.0;
    }
    values
        .iter()
        .map(|v| ((v - mean) / std_dev).powi(3))
        .sum::<f64>()
        / values.len() as f64
}

/// Excess kurtosis: zero for fewer than 4 values or zero spread
fn kurtosis(values: &[f64], mean: f64, std_dev: f64) -> f64 {
    if values.len() < 4 || std_dev == 0.0 {
        return 0.0;
    }
    values
        .iter()
        .map(|v| ((v - mean) / std_dev).powi(4))
        .sum::<f64>()
        / values.len() as f64
        - 3.0
}

fn analyze_failures(results: &[GameResult], failed: usize) -> FailureAnalysis {
    let failures: Vec<&GameResult> = results.iter().filter(|r| !r.success).collect();

    let average_remaining = if failures.is_empty() {
        0.0
    } else {
        failures
            .iter()
            .map(|r| r.final_candidate_count as f64)
            .sum::<f64>()
            / failures.len() as f64
    };

    let mut hardest: Vec<(String, usize)> = failures
        .iter()
        .map(|r| (r.target.clone(), r.final_candidate_count))
        .collect();
    hardest.sort_by(|(wa, ca), (wb, cb)| cb.cmp(ca).then(wa.cmp(wb)));
    hardest.truncate(10);

    FailureAnalysis {
        total: failed,
        rate: failed as f64 / results.len() as f64 * 100.0,
        average_remaining,
        hardest,
    }
}

fn analyze_efficiency(results: &[GameResult]) -> EfficiencyMetrics {
    let total_guesses: usize = results.iter().map(|r| r.guesses).sum();
    let average_per_word = total_guesses as f64 / results.len() as f64;
    let efficiency_ratio = if total_guesses > 0 {
        results.len() as f64 / total_guesses as f64 * 100.0
    } else {
        0.0
    };

    EfficiencyMetrics {
        total_guesses,
        average_per_word,
        efficiency_ratio,
    }
}
