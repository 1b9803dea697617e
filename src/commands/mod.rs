//! Command implementations
//!
//! One module per CLI operation plus the statistics layer they share.

pub mod solve;
pub mod stats;
pub mod test_all;

pub use solve::{SolveConfig, solve_word};
pub use stats::{BatchStatistics, EfficiencyMetrics, FailureAnalysis, GuessStatistics};
pub use test_all::{BatchRun, run_test_all};
