//! Display functions for command results

use super::formatters::{distribution_bar, pattern_words};
use crate::commands::BatchStatistics;
use crate::solver::GameResult;
use colored::Colorize;
use std::time::Duration;

/// Print the play-by-play of one solved (or failed) game
pub fn print_game_result(result: &GameResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.history.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.guess.text(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!("  Feedback: {}", pattern_words(&step.pattern));
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Failed to solve in {} guesses ({} candidates left)",
                result.guesses, result.final_candidate_count
            )
            .red()
            .bold()
        );
    }
}

/// Print the full statistics of a batch run
#[allow(clippy::too_many_lines)] // Comprehensive output formatting
pub fn print_batch_statistics(stats: &BatchStatistics, elapsed: Duration) {
    println!("\n{}", "═".repeat(70));
    println!(" Batch Results ");
    println!("{}", "═".repeat(70));

    // Overall performance
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_games);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.success_rate).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failures.rate).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.guess_stats.mean)
            .bright_yellow()
            .bold()
    );
    println!("  Total time:          {:.2}s", elapsed.as_secs_f64());
    if stats.total_games > 0 {
        println!(
            "  Time per word:       {:.1}ms",
            elapsed.as_millis() as f64 / stats.total_games as f64
        );
    }

    // Spread
    println!("\n📏 {}", "Spread".bright_cyan().bold());
    println!(
        "  Median:              {:.1}  (Q1 {:.1}, Q3 {:.1}, IQR {:.1})",
        stats.guess_stats.median,
        stats.guess_stats.q1,
        stats.guess_stats.q3,
        stats.guess_stats.iqr
    );
    println!(
        "  Std deviation:       {:.3}  (variance {:.3})",
        stats.guess_stats.std_dev, stats.guess_stats.variance
    );
    println!(
        "  Range:               {} ({} to {})",
        stats.guess_stats.range, stats.guess_stats.min, stats.guess_stats.max
    );
    println!(
        "  Shape:               skewness {:+.3}, excess kurtosis {:+.3}",
        stats.guess_stats.skewness, stats.guess_stats.kurtosis
    );

    // Percentiles
    println!("\n📐 {}", "Percentiles".bright_cyan().bold());
    for (level, value) in &stats.guess_stats.percentiles {
        println!("  p{level:<3} {value:.2}");
    }

    // Guess distribution
    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=stats.guess_stats.max.max(1) {
        let count = stats.solved_in(guesses);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar = distribution_bar(count, max_count, 40);
            println!(
                "  {guesses} guesses: {} {count:4} ({percentage:5.1}%)",
                bar.green()
            );
        }
    }

    // Failures
    if stats.failures.total > 0 {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        println!(
            "  Average candidates remaining: {:.1}",
            stats.failures.average_remaining
        );
        for (word, remaining) in stats.failures.hardest.iter().take(5) {
            println!(
                "  {} ({} candidates left)",
                word.yellow(),
                remaining
            );
        }
    }

    // Efficiency
    println!("\n⚡ {}", "Efficiency".bright_cyan().bold());
    println!(
        "  Total guesses:       {}",
        stats.efficiency.total_guesses
    );
    println!(
        "  Guesses per word:    {:.3}",
        stats.efficiency.average_per_word
    );
    println!(
        "  Efficiency ratio:    {:.1}% of one-guess ideal",
        stats.efficiency.efficiency_ratio
    );
}
