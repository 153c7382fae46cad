//! Style attributes from free-form influence analysis
//!
//! The analysis text is a loose bullet list; each attribute is the first line
//! mentioning its keyword.

use crate::models::StyleAttributes;

pub const UNKNOWN_ATTRIBUTE: &str = "Unknown";

fn extract_attribute(text: &str, keyword: &str) -> String {
    text.lines()
        .find(|line| line.to_lowercase().contains(keyword))
        .map(|line| {
            line.trim_start()
                .trim_start_matches(&['-', '*', '•'][..])
                .trim()
                .to_string()
        })
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| UNKNOWN_ATTRIBUTE.to_string())
}

/// Pull the five style attributes out of an analysis
pub fn extract_style_attributes(analysis: &str) -> StyleAttributes {
    StyleAttributes {
        emotional_tone: extract_attribute(analysis, "emotional"),
        lyrical_themes: extract_attribute(analysis, "themes"),
        writing_style: extract_attribute(analysis, "style"),
        rhyme_pattern: extract_attribute(analysis, "rhyme"),
        imagery: extract_attribute(analysis, "imagery"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_bulleted_lines() {
        let analysis = "Here is the analysis:\n- Emotional tone: melancholic\n* Lyrical themes: loss and longing\n• Writing style: poetic\n- Rhyme patterns: ABAB\n- Common imagery: rain, city lights";
        let attrs = extract_style_attributes(analysis);
        assert_eq!(attrs.emotional_tone, "Emotional tone: melancholic");
        assert_eq!(attrs.lyrical_themes, "Lyrical themes: loss and longing");
        assert_eq!(attrs.writing_style, "Writing style: poetic");
        assert_eq!(attrs.rhyme_pattern, "Rhyme patterns: ABAB");
        assert_eq!(attrs.imagery, "Common imagery: rain, city lights");
    }

    #[test]
    fn test_missing_attributes_are_unknown() {
        let attrs = extract_style_attributes("nothing useful here");
        assert_eq!(attrs.emotional_tone, UNKNOWN_ATTRIBUTE);
        assert_eq!(attrs.imagery, UNKNOWN_ATTRIBUTE);
        assert_eq!(extract_style_attributes(""), StyleAttributes {
            emotional_tone: UNKNOWN_ATTRIBUTE.to_string(),
            lyrical_themes: UNKNOWN_ATTRIBUTE.to_string(),
            writing_style: UNKNOWN_ATTRIBUTE.to_string(),
            rhyme_pattern: UNKNOWN_ATTRIBUTE.to_string(),
            imagery: UNKNOWN_ATTRIBUTE.to_string(),
        });
    }

    #[test]
    fn test_first_matching_line_wins() {
        let attrs = extract_style_attributes("Style: direct\nWriting style: narrative");
        assert_eq!(attrs.writing_style, "Style: direct");
    }
}
