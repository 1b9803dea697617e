//! Wordle Infogain - CLI
//!
//! Deterministic Wordle solver driven by a greedy expected information-gain
//! heuristic. The dictionary is always an explicit input; there is no
//! embedded default word list.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_infogain::{
    commands::{BatchStatistics, SolveConfig, run_test_all, solve_word},
    core::Dictionary,
    output::{print_batch_statistics, print_game_result, write_report_files},
    solver::DEFAULT_MAX_GUESSES,
    wordlists::{load_dictionary, merge_word_files},
};

#[derive(Parser)]
#[command(
    name = "wordle_infogain",
    about = "Deterministic Wordle solver using greedy expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a newline-delimited word list file
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show per-turn feedback symbols
        #[arg(short, long)]
        verbose: bool,

        /// Guess budget per game
        #[arg(short = 'g', long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,
    },

    /// Solve every dictionary word and report statistics
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Directory to write the report text files into
        #[arg(short, long)]
        report_dir: Option<PathBuf>,

        /// Guess budget per game
        #[arg(short = 'g', long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,
    },

    /// Merge two sorted word list files into one
    Merge {
        /// First sorted word list
        first: PathBuf,

        /// Second sorted word list
        second: PathBuf,

        /// Output file for the merged list
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            word,
            verbose,
            max_guesses,
        } => {
            let dictionary = load_required_dictionary(cli.wordlist.as_ref())?;
            run_solve_command(&dictionary, &word, verbose, max_guesses)
        }
        Commands::TestAll {
            limit,
            report_dir,
            max_guesses,
        } => {
            let dictionary = load_required_dictionary(cli.wordlist.as_ref())?;
            run_test_all_command(&dictionary, limit, report_dir.as_deref(), max_guesses)
        }
        Commands::Merge {
            first,
            second,
            output,
        } => run_merge_command(&first, &second, &output),
    }
}

/// Load the dictionary named by `-w`; the solving commands cannot run
/// without one
fn load_required_dictionary(wordlist: Option<&PathBuf>) -> Result<Dictionary> {
    let Some(path) = wordlist else {
        bail!("no word list given: pass one with -w/--wordlist");
    };

    let dictionary = load_dictionary(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    if dictionary.is_empty() {
        bail!("word list {} contains no valid five-letter words", path.display());
    }

    Ok(dictionary)
}

fn run_solve_command(
    dictionary: &Dictionary,
    word: &str,
    verbose: bool,
    max_guesses: usize,
) -> Result<()> {
    let mut config = SolveConfig::new(word.to_string());
    config.max_guesses = max_guesses;

    let result = solve_word(dictionary, &config).map_err(|e| anyhow::anyhow!(e))?;
    print_game_result(&result, verbose);
    Ok(())
}

fn run_test_all_command(
    dictionary: &Dictionary,
    limit: Option<usize>,
    report_dir: Option<&std::path::Path>,
    max_guesses: usize,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nDictionary: {} words", dictionary.len());
    println!();

    let run = run_test_all(dictionary, limit, max_guesses)?;
    let stats = BatchStatistics::from_results(&run.results);
    print_batch_statistics(&stats, run.elapsed);

    if let Some(dir) = report_dir {
        let paths = write_report_files(&stats, dir)
            .with_context(|| format!("failed to write reports into {}", dir.display()))?;
        println!("\nReports written:");
        for path in paths {
            println!("  - {}", path.display());
        }
    }

    Ok(())
}

fn run_merge_command(
    first: &std::path::Path,
    second: &std::path::Path,
    output: &std::path::Path,
) -> Result<()> {
    let count = merge_word_files(first, second, output).with_context(|| {
        format!(
            "failed to merge {} and {}",
            first.display(),
            second.display()
        )
    })?;

    println!("Merged {count} words into {}", output.display());
    Ok(())
}
