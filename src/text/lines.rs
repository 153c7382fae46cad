//! Line classification and per-line syllable counts

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::LineFeedback;
use crate::syllables::SyllableEstimator;

lazy_static! {
    static ref SECTION_LABEL: Regex = Regex::new(r"^\[.*\]$").unwrap();
    /// Everything except word characters, whitespace, apostrophes and hyphens
    static ref NON_LYRIC_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_\s'-]").unwrap();
}

/// True if the trimmed line is a bracketed section label like `[Hook]`
pub fn is_section_label(line: &str) -> bool {
    SECTION_LABEL.is_match(line.trim())
}

/// Strip punctuation (keeping `'` and `-`) and split into words
pub fn lyric_words(text: &str) -> Vec<String> {
    NON_LYRIC_CHARS
        .replace_all(text, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Syllables in one line; section labels count as zero
pub fn line_syllables(estimator: &SyllableEstimator, line: &str) -> usize {
    if is_section_label(line) {
        return 0;
    }
    lyric_words(line).iter().map(|w| estimator.count(w)).sum()
}

/// Gutter feedback for every `\n`-delimited line
pub fn line_feedback(estimator: &SyllableEstimator, text: &str) -> Vec<LineFeedback> {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| {
            let is_label = is_section_label(line);
            let syllables = if is_label { 0 } else { line_syllables(estimator, line) };
            let display = if is_label || syllables == 0 {
                "-".to_string()
            } else {
                syllables.to_string()
            };
            LineFeedback {
                index,
                syllables,
                is_section_label: is_label,
                display,
            }
        })
        .collect()
}
