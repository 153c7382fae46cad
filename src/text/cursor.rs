//! Word-under-cursor detection
//!
//! Cursor positions are character indices. Browser textareas report UTF-16
//! offsets; convert those with [`utf16_to_char_index`] first.

/// Characters that can belong to a word under the cursor
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '\'' || c == '-'
}

/// The lowercase word touching the cursor, or `""` when the cursor sits in
/// whitespace or punctuation
///
/// Scans backward and forward from the cursor over word characters and
/// joins both halves. Cursors past the end clamp to the end of the text.
pub fn current_word_at(text: &str, cursor: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    let mut start = cursor;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }

    let mut end = cursor;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }

    chars[start..end]
        .iter()
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Convert a UTF-16 code-unit offset into a character index
///
/// An offset inside a surrogate pair maps to the character containing it;
/// offsets past the end clamp to the character count.
pub fn utf16_to_char_index(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (index, c) in text.chars().enumerate() {
        if units >= utf16_offset {
            return index;
        }
        units += c.len_utf16();
        if units > utf16_offset {
            return index;
        }
    }
    text.chars().count()
}
