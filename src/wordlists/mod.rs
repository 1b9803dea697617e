//! Word list input
//!
//! File loading and merging for dictionaries. There is no embedded default
//! list: the dictionary is always an explicitly constructed, explicitly
//! passed value.

mod loader;
mod merge;

pub use loader::{dictionary_from_lines, dictionary_from_slice, load_dictionary};
pub use merge::{merge_sorted_lines, merge_word_files};
