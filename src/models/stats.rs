//! Document and per-line statistics

use serde::{Deserialize, Serialize};

/// Aggregate statistics for a whole lyric document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DocumentStats {
    pub syllables: usize,
    pub words: usize,
    pub lines: usize,
    pub bars: usize,
    /// Formatted as `~M:SS`
    pub duration: String,
}

/// Syllable feedback for one line of the document (gutter display)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LineFeedback {
    pub index: usize,
    pub syllables: usize,
    pub is_section_label: bool,
    /// `"-"` for labels and empty lines, otherwise the syllable count
    pub display: String,
}
