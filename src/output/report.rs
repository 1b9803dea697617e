//! Report files for batch runs
//!
//! Writes three plain-text summaries next to each other: mean and standard
//! deviation, median and quartiles, and the complete frequency distribution.
//! The builders return strings so the content is testable without touching
//! the filesystem.

use crate::commands::BatchStatistics;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const MEAN_SD_FILE: &str = "mean_sd.txt";
pub const MEDIAN_QUARTILES_FILE: &str = "median_quartiles.txt";
pub const FREQUENCY_DISTRIBUTION_FILE: &str = "frequency_distribution.txt";

/// Write all three report files into `dir`, returning their paths
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created or a file cannot
/// be written.
pub fn write_report_files(stats: &BatchStatistics, dir: &Path) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let reports = [
        (MEAN_SD_FILE, mean_sd_report(stats)),
        (MEDIAN_QUARTILES_FILE, median_quartiles_report(stats)),
        (
            FREQUENCY_DISTRIBUTION_FILE,
            frequency_distribution_report(stats),
        ),
    ];

    let mut paths = Vec::with_capacity(reports.len());
    for (name, content) in reports {
        let path = dir.join(name);
        fs::write(&path, content)?;
        paths.push(path);
    }

    Ok(paths)
}

/// Mean and standard deviation analysis
#[must_use]
pub fn mean_sd_report(stats: &BatchStatistics) -> String {
    let g = &stats.guess_stats;
    let mut out = String::new();

    out.push_str("WORDLE ALGORITHM - MEAN AND STANDARD DEVIATION ANALYSIS\n");
    out.push_str(&"=".repeat(60));
    out.push_str("\n\n");
    out.push_str(&format!("Dataset: {} words\n", stats.total_games));
    out.push_str(&format!("Success Rate: {:.4}%\n\n", stats.success_rate));

    out.push_str("CENTRAL TENDENCY:\n");
    out.push_str(&format!("Mean (Average): {:.6} guesses\n", g.mean));
    out.push_str(&format!("Standard Deviation: {:.6}\n", g.std_dev));
    out.push_str(&format!("Variance: {:.6}\n\n", g.variance));

    out.push_str("CONFIDENCE INTERVALS (mean ± k*std_dev):\n");
    for (label, k) in [("68%", 1.0), ("95%", 2.0), ("99.7%", 3.0)] {
        out.push_str(&format!(
            "{label} confidence: {:.4} to {:.4} guesses\n",
            g.mean - k * g.std_dev,
            g.mean + k * g.std_dev
        ));
    }

    out.push_str("\nINTERPRETATION:\n");
    out.push_str(&format!(
        "- The algorithm averages {:.4} guesses per word\n",
        g.mean
    ));
    let variability = if g.std_dev > 1.0 {
        "high"
    } else if g.std_dev > 0.5 {
        "moderate"
    } else {
        "low"
    };
    out.push_str(&format!(
        "- Standard deviation of {:.4} indicates {variability} variability\n",
        g.std_dev
    ));
    out.push_str(&format!(
        "- 95% of words solved within {:.2} guesses\n",
        g.mean + 2.0 * g.std_dev
    ));

    out
}

/// Median, quartile, and percentile analysis
#[must_use]
pub fn median_quartiles_report(stats: &BatchStatistics) -> String {
    let g = &stats.guess_stats;
    let mut out = String::new();

    out.push_str("WORDLE ALGORITHM - MEDIAN AND QUARTILE ANALYSIS\n");
    out.push_str(&"=".repeat(55));
    out.push_str("\n\n");
    out.push_str(&format!("Dataset: {} words\n\n", stats.total_games));

    out.push_str("QUARTILE STATISTICS:\n");
    out.push_str(&format!("Minimum: {} guesses\n", g.min));
    out.push_str(&format!("Q1 (25th percentile): {:.3} guesses\n", g.q1));
    out.push_str(&format!("Median (50th percentile): {:.3} guesses\n", g.median));
    out.push_str(&format!("Q3 (75th percentile): {:.3} guesses\n", g.q3));
    out.push_str(&format!("Maximum: {} guesses\n\n", g.max));

    out.push_str("SPREAD MEASURES:\n");
    out.push_str(&format!(
        "Range: {} guesses ({} to {})\n",
        g.range, g.min, g.max
    ));
    out.push_str(&format!("Interquartile Range (IQR): {:.3} guesses\n", g.iqr));
    out.push_str(&format!(
        "Semi-Interquartile Range: {:.3} guesses\n\n",
        g.iqr / 2.0
    ));

    out.push_str("DETAILED PERCENTILES:\n");
    for (level, value) in &g.percentiles {
        out.push_str(&format!("{level}th percentile: {value:.3} guesses\n"));
    }

    out.push_str("\nDISTRIBUTION PROPERTIES:\n");
    out.push_str(&format!("Mode (most frequent): {} guesses\n", g.mode));
    let skew_desc = if g.skewness > 0.0 {
        "right-skewed"
    } else if g.skewness < 0.0 {
        "left-skewed"
    } else {
        "symmetric"
    };
    out.push_str(&format!("Skewness: {:.4} ({skew_desc})\n", g.skewness));
    let kurt_desc = if g.kurtosis > 0.0 {
        "heavy-tailed"
    } else if g.kurtosis < 0.0 {
        "light-tailed"
    } else {
        "normal-tailed"
    };
    out.push_str(&format!("Kurtosis: {:.4} ({kurt_desc})\n", g.kurtosis));

    out
}

/// Complete guess-count frequency distribution
#[must_use]
pub fn frequency_distribution_report(stats: &BatchStatistics) -> String {
    let mut out = String::new();

    out.push_str("WORDLE ALGORITHM - COMPLETE FREQUENCY DISTRIBUTION\n");
    out.push_str(&"=".repeat(58));
    out.push_str("\n\n");

    out.push_str("GUESS COUNT DISTRIBUTION:\n");
    out.push_str("Guesses | Count    | Percentage | Cumulative %\n");
    out.push_str(&"-".repeat(45));
    out.push('\n');

    let total = stats.total_games.max(1);
    let mut cumulative = 0.0;
    for guesses in 1..=stats.guess_stats.max.max(6) {
        let count = stats.solved_in(guesses);
        let pct = count as f64 / total as f64 * 100.0;
        cumulative += pct;
        out.push_str(&format!(
            "{guesses:7} | {count:8} | {pct:9.2}% | {cumulative:10.2}%\n"
        ));
    }

    if stats.failed > 0 {
        let fail_pct = stats.failed as f64 / total as f64 * 100.0;
        cumulative += fail_pct;
        out.push_str(&format!(
            "  Failed | {:8} | {fail_pct:9.2}% | {cumulative:10.2}%\n",
            stats.failed
        ));
    }

    out.push_str(&"-".repeat(45));
    out.push('\n');
    out.push_str(&format!("  Total | {:8} | {:9.1}% |\n\n", stats.total_games, 100.0));

    out.push_str("KEY THRESHOLDS:\n");
    let under = |n: usize| {
        (1..=n).map(|c| stats.solved_in(c)).sum::<usize>() as f64 / total as f64 * 100.0
    };
    out.push_str(&format!(
        "Words solved in ≤3 guesses: {:.2}%\n",
        under(3)
    ));
    out.push_str(&format!(
        "Words solved in ≤4 guesses: {:.2}%\n",
        under(4)
    ));
    out.push_str(&format!(
        "Success rate (≤6 guesses): {:.2}%\n\n",
        stats.success_rate
    ));

    out.push_str("EFFICIENCY METRICS:\n");
    out.push_str(&format!(
        "Total guesses used: {}\n",
        stats.efficiency.total_guesses
    ));
    out.push_str(&format!(
        "Average per word: {:.4}\n",
        stats.efficiency.average_per_word
    ));
    out.push_str(&format!(
        "Efficiency ratio: {:.2}%\n",
        stats.efficiency.efficiency_ratio
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GameResult;

    fn sample_stats() -> BatchStatistics {
        let result = |success, guesses, remaining, target: &str| GameResult {
            success,
            guesses,
            history: Vec::new(),
            final_candidate_count: remaining,
            target: target.to_string(),
        };

        BatchStatistics::from_results(&[
            result(true, 2, 1, "CRANE"),
            result(true, 3, 1, "SLATE"),
            result(true, 3, 1, "IRATE"),
            result(true, 4, 1, "TRACE"),
            result(false, 6, 3, "GRATE"),
        ])
    }

    #[test]
    fn mean_sd_report_names_its_numbers() {
        let report = mean_sd_report(&sample_stats());

        assert!(report.contains("MEAN AND STANDARD DEVIATION"));
        assert!(report.contains("Mean (Average): 3.000000 guesses"));
        assert!(report.contains("Success Rate: 80.0000%"));
    }

    #[test]
    fn median_quartiles_report_lists_percentiles() {
        let report = median_quartiles_report(&sample_stats());

        assert!(report.contains("Median (50th percentile): 3.000 guesses"));
        assert!(report.contains("10th percentile"));
        assert!(report.contains("99th percentile"));
        assert!(report.contains("Mode (most frequent): 3 guesses"));
    }

    #[test]
    fn frequency_report_includes_failures_row() {
        let report = frequency_distribution_report(&sample_stats());

        assert!(report.contains("GUESS COUNT DISTRIBUTION"));
        assert!(report.contains("Failed"));
        assert!(report.contains("Efficiency ratio"));
    }

    #[test]
    fn writes_all_three_files() {
        let dir = std::env::temp_dir().join("wordle_infogain_report_test");
        let _ = fs::remove_dir_all(&dir);

        let paths = write_report_files(&sample_stats(), &dir).unwrap();

        assert_eq!(paths.len(), 3);
        for path in &paths {
            assert!(path.exists());
        }

        let _ = fs::remove_dir_all(&dir);
    }
}
