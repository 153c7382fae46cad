//! Metadata markers in generated text
//!
//! The generator is asked to emit `[Song Title]` followed by the title on the
//! next line, `[Audio Tag: …]` and optionally `[Image Prompt: …]`. The first
//! occurrence of each wins.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::SongMetadata;

lazy_static! {
    static ref SONG_TITLE: Regex =
        Regex::new(r"(?i)\[song title\][ \t]*\r?\n[ \t]*([^\r\n]*)").unwrap();
    static ref AUDIO_TAG: Regex = Regex::new(r"(?i)\[audio tag:\s*([^\]\r\n]*)\]").unwrap();
    static ref IMAGE_PROMPT: Regex = Regex::new(r"(?i)\[image prompt:\s*([^\]\r\n]*)\]").unwrap();
    /// Lines that can never be a title: metadata and structural labels
    static ref NOT_A_TITLE: Regex = Regex::new(
        r"(?i)^\[(song title|audio tag:.*|image prompt:.*|verse\b.*|hook|chorus|bridge|instrumental|harmonizing|drop|intro|outro)\]$"
    )
    .unwrap();
}

/// Extract title, audio tag and image prompt
///
/// Without an explicit `[Song Title]` marker the title falls back to the
/// first non-blank line that is not a metadata or section label, with
/// surrounding brackets removed.
pub fn extract_metadata(text: &str) -> SongMetadata {
    let song_title = SONG_TITLE
        .captures(text)
        .and_then(|c| clean_value(c.get(1)?.as_str()))
        .or_else(|| fallback_title(text));

    let audio_tag = AUDIO_TAG
        .captures(text)
        .and_then(|c| clean_value(c.get(1)?.as_str()));

    let image_prompt = IMAGE_PROMPT
        .captures(text)
        .and_then(|c| clean_value(c.get(1)?.as_str()));

    SongMetadata {
        song_title,
        audio_tag,
        image_prompt,
    }
}

fn fallback_title(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .find(|l| !NOT_A_TITLE.is_match(l))
        .and_then(clean_value)
}

/// Trim and drop one pair of enclosing brackets; blank becomes `None`
fn clean_value(raw: &str) -> Option<String> {
    let mut value = raw.trim();
    if value.starts_with('[') && value.ends_with(']') && value.len() >= 2 {
        value = value[1..value.len() - 1].trim();
    }
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_markers() {
        let text = "[Song Title]\nMidnight Drive\n[Audio Tag: synthwave, dreamy]\n[Image Prompt: neon highway at night]\n\n[Verse 1]\nla la";
        let meta = extract_metadata(text);
        assert_eq!(meta.song_title.as_deref(), Some("Midnight Drive"));
        assert_eq!(meta.audio_tag.as_deref(), Some("synthwave, dreamy"));
        assert_eq!(meta.image_prompt.as_deref(), Some("neon highway at night"));
    }

    #[test]
    fn test_first_match_wins() {
        let text = "[Audio Tag: pop]\n[Audio Tag: rock]";
        assert_eq!(extract_metadata(text).audio_tag.as_deref(), Some("pop"));
    }

    #[test]
    fn test_title_falls_back_to_first_line() {
        let meta = extract_metadata("[Untitled Song]\n[Audio Tag: Contemporary Pop]\n");
        assert_eq!(meta.song_title.as_deref(), Some("Untitled Song"));

        let meta = extract_metadata("\n  Paper Hearts  \n[Verse 1]\n");
        assert_eq!(meta.song_title.as_deref(), Some("Paper Hearts"));
    }

    #[test]
    fn test_fallback_skips_labels() {
        let meta = extract_metadata("[Audio Tag: lo-fi]\n[Verse 1]\nwalking home");
        assert_eq!(meta.song_title.as_deref(), Some("walking home"));
        assert_eq!(meta.audio_tag.as_deref(), Some("lo-fi"));
        assert_eq!(meta.image_prompt, None);
    }

    #[test]
    fn test_bracketed_title_value() {
        let meta = extract_metadata("[Song Title]\n[Golden Hour]\n");
        assert_eq!(meta.song_title.as_deref(), Some("Golden Hour"));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_metadata(""), SongMetadata::default());
        assert_eq!(extract_metadata("[Verse 1]\n[Hook]"), SongMetadata::default());
    }
}
