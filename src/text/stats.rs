//! Whole-document statistics
//!
//! Recomputed from scratch on every edit. Documents are tens to low hundreds
//! of lines, so a linear pass is well inside a frame.

use crate::models::DocumentStats;
use crate::settings::{LINES_PER_BAR, SECONDS_PER_BAR};
use crate::syllables::SyllableEstimator;

use super::lines::{line_syllables, lyric_words};

/// Aggregate syllables, words, lines, bars and estimated duration
///
/// Section labels contribute no syllables but their words are counted;
/// an empty document still has one line and one bar.
pub fn document_stats(estimator: &SyllableEstimator, text: &str) -> DocumentStats {
    let lines: Vec<&str> = text.split('\n').collect();
    let syllables = lines.iter().map(|l| line_syllables(estimator, l)).sum();
    let words = lyric_words(text).len();
    let line_count = lines.len();
    let bars = bars_for_lines(line_count);

    DocumentStats {
        syllables,
        words,
        lines: line_count,
        bars,
        duration: format_duration(bars),
    }
}

/// `ceil(lines / 4)`
pub fn bars_for_lines(lines: usize) -> usize {
    (lines + LINES_PER_BAR - 1) / LINES_PER_BAR
}

/// `~M:SS` for a bar count at the fixed tempo
pub fn format_duration(bars: usize) -> String {
    let seconds = (bars as f64 * SECONDS_PER_BAR).round() as u64;
    format!("~{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let stats = document_stats(&SyllableEstimator::default(), "");
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.syllables, 0);
        assert_eq!(stats.bars, 1);
        assert_eq!(stats.duration, "~0:02");
    }

    #[test]
    fn test_bars() {
        assert_eq!(bars_for_lines(1), 1);
        assert_eq!(bars_for_lines(4), 1);
        assert_eq!(bars_for_lines(5), 2);
        assert_eq!(bars_for_lines(8), 2);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "~0:00");
        assert_eq!(format_duration(1), "~0:02");
        assert_eq!(format_duration(2), "~0:03");
        assert_eq!(format_duration(40), "~1:00");
        assert_eq!(format_duration(47), "~1:11");
    }

    #[test]
    fn test_labels_count_as_words_not_syllables() {
        let stats = document_stats(&SyllableEstimator::default(), "[Verse 1]\nthe sun");
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.syllables, 2);
    }
}
