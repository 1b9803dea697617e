//! Formatting utilities for terminal output

use crate::core::Pattern;

/// Spell a pattern out position by position ("green yellow grey ...")
#[must_use]
pub fn pattern_words(pattern: &Pattern) -> String {
    pattern
        .symbols()
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        (((value / max) * width as f64) as usize).min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one bucket of the guess distribution
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    let bar = create_progress_bar(count as f64, max_count as f64, width);
    if count > 0 && !bar.starts_with('█') {
        // A non-empty bucket always shows at least one filled cell
        let mut forced = String::from("█");
        forced.push_str(&"░".repeat(width.saturating_sub(1)));
        return forced;
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn pattern_words_uses_boundary_vocabulary() {
        let guess = Word::new("SPEED").unwrap();
        let answer = Word::new("ERASE").unwrap();

        let pattern = Pattern::compute(&guess, &answer);

        assert_eq!(pattern_words(&pattern), "yellow grey yellow yellow grey");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max_stays_empty() {
        assert_eq!(create_progress_bar(0.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn distribution_bar_never_hides_a_nonzero_bucket() {
        let bar = distribution_bar(1, 1000, 10);
        assert!(bar.starts_with('█'));
    }
}
