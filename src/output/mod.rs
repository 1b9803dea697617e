//! Terminal output and report files
//!
//! Display utilities for CLI results plus the plain-text report writers.

pub mod display;
pub mod formatters;
pub mod report;

pub use display::{print_batch_statistics, print_game_result};
pub use report::write_report_files;
