//! Per-keystroke analysis API
//!
//! Stateless counterparts of the session functions, for hosts that keep the
//! document themselves.

use wasm_bindgen::prelude::*;

use crate::api::helpers::serialize;
use crate::syllables::SyllableEstimator;
use crate::text;

/// Syllables in a single word
#[wasm_bindgen(js_name = countSyllables)]
pub fn count_syllables(word: &str) -> usize {
    SyllableEstimator::default().count(word)
}

/// Syllables in one line (section labels are 0)
#[wasm_bindgen(js_name = countLineSyllables)]
pub fn count_line_syllables(line: &str) -> usize {
    text::line_syllables(&SyllableEstimator::default(), line)
}

/// `{syllables, words, lines, bars, duration}` for a document
#[wasm_bindgen(js_name = getDocumentStats)]
pub fn get_document_stats(content: &str) -> Result<JsValue, JsValue> {
    let stats = text::document_stats(&SyllableEstimator::default(), content);
    serialize(&stats, "Failed to serialize document stats")
}

/// Per-line gutter feedback
#[wasm_bindgen(js_name = getLineFeedback)]
pub fn get_line_feedback(content: &str) -> Result<JsValue, JsValue> {
    let feedback = text::line_feedback(&SyllableEstimator::default(), content);
    serialize(&feedback, "Failed to serialize line feedback")
}

/// Word under a textarea cursor
///
/// `cursor` is the textarea's `selectionStart` (UTF-16 code units).
#[wasm_bindgen(js_name = getCurrentWord)]
pub fn get_current_word(content: &str, cursor: usize) -> String {
    let index = text::utf16_to_char_index(content, cursor);
    text::current_word_at(content, index)
}
