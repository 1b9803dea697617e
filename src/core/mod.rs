//! Core domain types
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod dictionary;
mod feedback;
mod letters;
mod word;

pub use dictionary::Dictionary;
pub use feedback::{Feedback, Pattern};
pub use letters::LetterSet;
pub use word::{WORD_LEN, Word, WordError};
