//! The solving engine
//!
//! Pure, deterministic components: the constraint filter, letter tracker,
//! scoring heuristic, adaptive guess selector, and the game state machine
//! that drives them.

mod filter;
mod game;
mod scorer;
mod selector;
mod tracker;

pub use filter::is_compatible;
pub use game::{
    DEFAULT_MAX_GUESSES, GameResult, GameState, GuessRecord, SolveError, Solver,
};
pub use scorer::{ScoringConfig, score_guess};
pub use selector::GuessSelector;
pub use tracker::LetterTracker;
