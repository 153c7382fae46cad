//! Heuristic syllable estimator
//!
//! Vowel-group counting with an exception table and four ordered suffix
//! corrections. The corrections run in a fixed order against one running
//! count; reordering them changes results.

use super::exceptions::ExceptionTable;

const VOWELS: &[u8] = b"aeiouy";

fn is_vowel(b: u8) -> bool {
    VOWELS.contains(&b)
}

/// Counts syllables in single words
#[derive(Debug, Clone, Copy)]
pub struct SyllableEstimator<'t> {
    exceptions: &'t ExceptionTable,
}

impl Default for SyllableEstimator<'static> {
    fn default() -> Self {
        Self {
            exceptions: ExceptionTable::builtin(),
        }
    }
}

impl<'t> SyllableEstimator<'t> {
    /// Estimator backed by a caller-supplied exception table
    pub fn with_exceptions(exceptions: &'t ExceptionTable) -> Self {
        Self { exceptions }
    }

    /// Estimate the syllable count of one word
    ///
    /// Returns 0 only when nothing alphabetic survives normalization;
    /// otherwise the result is at least 1.
    pub fn count(&self, word: &str) -> usize {
        let word = normalize(word);
        if word.is_empty() {
            return 0;
        }
        if word.len() <= 2 {
            return 1;
        }

        if let Some(count) = self.exceptions.get(&word) {
            return count;
        }

        let bytes = word.as_bytes();
        let mut count = vowel_groups(bytes);

        // silent trailing e
        if word.ends_with('e') && !word.ends_with("le") && count > 1 {
            count -= 1;
        }

        // silent -ed
        if word.ends_with("ed") && !word.ends_with("ted") && !word.ends_with("ded") && count > 1 {
            count -= 1;
        }

        // silent -es
        if word.ends_with("es")
            && !["ses", "zes", "xes", "ches", "shes"]
                .iter()
                .any(|s| word.ends_with(s))
            && count > 1
        {
            count -= 1;
        }

        // syllabic -le ("bottle"), only after a consonant
        if word.ends_with("le") && bytes.len() > 2 && !is_vowel(bytes[bytes.len() - 3]) {
            count += 1;
        }

        count.max(1)
    }
}

/// Lowercase and keep ASCII letters only
fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Number of maximal runs of vowels
fn vowel_groups(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut prev_was_vowel = false;
    for &b in bytes {
        let vowel = is_vowel(b);
        if vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = vowel;
    }
    count
}

/// Count syllables with the built-in exception table
pub fn count_syllables(word: &str) -> usize {
    SyllableEstimator::default().count(word)
}
