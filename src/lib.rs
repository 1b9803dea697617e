//! Wordle Infogain
//!
//! A deterministic Wordle solving engine built on a greedy expected
//! information-gain heuristic. Same dictionary, same target, same answer
//! path, every run.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_infogain::core::{Pattern, Word};
//! use wordle_infogain::solver::Solver;
//! use wordle_infogain::wordlists::dictionary_from_slice;
//!
//! let dictionary = dictionary_from_slice(&["CRANE", "SLATE", "IRATE"]);
//! let target = Word::new("slate").unwrap();
//!
//! let mut solver = Solver::new(&dictionary);
//! let result = solver.solve(&target, 6).unwrap();
//! assert!(result.success);
//! ```

// Core domain types
pub mod core;

// The solving engine
pub mod solver;

// Word list input
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output and reports
pub mod output;
