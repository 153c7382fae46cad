//! Lyric text analysis
//!
//! Stateless functions over raw document text. Nothing here suspends or
//! caches; callers re-run them on every keystroke.
//!
//! ## Modules
//!
//! - `lines`: section-label classification, per-line syllables and feedback
//! - `stats`: whole-document statistics (syllables, words, lines, bars, duration)
//! - `cursor`: word-under-cursor detection

pub mod cursor;
pub mod lines;
pub mod stats;

pub use cursor::{current_word_at, utf16_to_char_index};
pub use lines::{is_section_label, line_feedback, line_syllables, lyric_words};
pub use stats::{bars_for_lines, document_stats, format_duration};
