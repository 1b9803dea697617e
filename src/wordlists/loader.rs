//! Word list loading
//!
//! Dictionaries come from newline-delimited text files: one word per line,
//! trimmed, filtered to exactly five letters, uppercased. Lines that fail
//! validation are silently dropped - that is the documented filtering
//! policy, not an error. File order is preserved because it decides
//! guess-selection tie-breaks.

use crate::core::{Dictionary, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened. Invalid lines
/// never error; they are skipped.
///
/// # Examples
/// ```no_run
/// use wordle_infogain::wordlists::load_dictionary;
///
/// let dictionary = load_dictionary("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(dictionary_from_lines(content.lines()))
}

/// Build a dictionary from raw lines, applying the filtering policy
pub fn dictionary_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Dictionary {
    let words = lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Dictionary::from_words(words)
}

/// Convert a string slice to a dictionary
///
/// # Examples
/// ```
/// use wordle_infogain::wordlists::dictionary_from_slice;
///
/// let dictionary = dictionary_from_slice(&["crane", "slate"]);
/// assert_eq!(dictionary.len(), 2);
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    dictionary_from_lines(slice.iter().copied())
}
