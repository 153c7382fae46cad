// Line and document statistics over whole lyric documents

use lyricist_wasm::syllables::SyllableEstimator;
use lyricist_wasm::text::{current_word_at, document_stats, line_feedback, utf16_to_char_index};

const DRAFT: &str = "[Verse 1]\nthe fire inside\nwe walked tonight\n\n[Hook]";

#[test]
fn test_draft_statistics() {
    let stats = document_stats(&SyllableEstimator::default(), DRAFT);
    assert_eq!(stats.lines, 5);
    assert_eq!(stats.syllables, 9);
    // label text still counts towards words
    assert_eq!(stats.words, 9);
    assert_eq!(stats.bars, 2);
    assert_eq!(stats.duration, "~0:03");
}

#[test]
fn test_labels_never_add_syllables() {
    let estimator = SyllableEstimator::default();
    let with_labels = document_stats(&estimator, "[Bridge]\nriver\n[Instrumental]");
    let without = document_stats(&estimator, "\nriver\n");
    assert_eq!(with_labels.syllables, without.syllables);
    assert_eq!(with_labels.lines, without.lines);
}

#[test]
fn test_feedback_matches_totals() {
    let estimator = SyllableEstimator::default();
    let feedback = line_feedback(&estimator, DRAFT);
    let total: usize = feedback.iter().map(|f| f.syllables).sum();
    assert_eq!(total, document_stats(&estimator, DRAFT).syllables);

    let displays: Vec<&str> = feedback.iter().map(|f| f.display.as_str()).collect();
    assert_eq!(displays, vec!["-", "5", "4", "-", "-"]);
}

#[test]
fn test_duration_rolls_over_minutes() {
    let text = vec!["la"; 200].join("\n");
    let stats = document_stats(&SyllableEstimator::default(), &text);
    assert_eq!(stats.bars, 50);
    assert_eq!(stats.duration, "~1:15");
}

#[test]
fn test_word_under_textarea_cursor() {
    let text = "héllo wörld night";
    // selectionStart past "héllo wörld " is 12 UTF-16 units
    let index = utf16_to_char_index(text, 12);
    assert_eq!(index, 12);
    assert_eq!(current_word_at(text, index), "night");

    let emoji = "🔥 fire";
    // the emoji occupies two UTF-16 units but one char
    let index = utf16_to_char_index(emoji, 3);
    assert_eq!(index, 2);
    assert_eq!(current_word_at(emoji, index), "fire");
}
