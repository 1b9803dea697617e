//! Word list merging
//!
//! Merges two already-sorted word files into one sorted, deduplicated file.
//! Comparison is case-insensitive; the line from the first list wins when
//! both lists carry the same word.

use std::fs;
use std::io;
use std::path::Path;

/// Merge two sorted line lists, dropping case-insensitive duplicates
#[must_use]
pub fn merge_sorted_lines(first: &[&str], second: &[&str]) -> Vec<String> {
    let mut merged = Vec::with_capacity(first.len() + second.len());
    let mut a = 0;
    let mut b = 0;

    while a < first.len() && b < second.len() {
        let left = first[a].to_uppercase();
        let right = second[b].to_uppercase();

        if left <= right {
            merged.push(first[a].to_string());
            if left == right {
                b += 1;
            }
            a += 1;
        } else {
            merged.push(second[b].to_string());
            b += 1;
        }
    }

    merged.extend(first[a..].iter().map(ToString::to_string));
    merged.extend(second[b..].iter().map(ToString::to_string));
    merged
}

/// Merge two sorted word files into `output`, returning the merged line count
///
/// Blank lines are skipped; surrounding whitespace is trimmed.
///
/// # Errors
///
/// Returns an I/O error if either input cannot be read or the output cannot
/// be written.
pub fn merge_word_files<P: AsRef<Path>>(first: P, second: P, output: P) -> io::Result<usize> {
    let first_content = fs::read_to_string(first)?;
    let second_content = fs::read_to_string(second)?;

    let first_lines: Vec<&str> = non_blank_lines(&first_content);
    let second_lines: Vec<&str> = non_blank_lines(&second_content);

    let merged = merge_sorted_lines(&first_lines, &second_lines);
    let count = merged.len();

    let mut body = merged.join("\n");
    body.push('\n');
    fs::write(output, body)?;

    Ok(count)
}

fn non_blank_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaves_sorted_inputs() {
        let merged = merge_sorted_lines(&["APPLE", "CRANE"], &["BRACE", "SLATE"]);
        assert_eq!(merged, ["APPLE", "BRACE", "CRANE", "SLATE"]);
    }

    #[test]
    fn duplicates_written_once() {
        let merged = merge_sorted_lines(&["CRANE", "SLATE"], &["CRANE", "TRACE"]);
        assert_eq!(merged, ["CRANE", "SLATE", "TRACE"]);
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let merged = merge_sorted_lines(&["crane"], &["CRANE", "SLATE"]);
        assert_eq!(merged, ["crane", "SLATE"]);
    }

    #[test]
    fn uneven_lengths_drain_the_remainder() {
        let merged = merge_sorted_lines(&["AAAAA"], &["BBBBB", "CCCCC", "DDDDD"]);
        assert_eq!(merged, ["AAAAA", "BBBBB", "CCCCC", "DDDDD"]);

        let merged = merge_sorted_lines(&["BBBBB", "CCCCC"], &[]);
        assert_eq!(merged, ["BBBBB", "CCCCC"]);
    }

    #[test]
    fn empty_inputs_merge_to_empty() {
        assert!(merge_sorted_lines(&[], &[]).is_empty());
    }
}
