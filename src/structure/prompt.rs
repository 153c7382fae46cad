//! Generation prompt builder
//!
//! Renders the system and user prompts sent to the generation gateway from
//! mustache templates. The structure section is built from the same
//! [`StructurePlan`] the preview shows, so the two cannot drift.

use serde::Serialize;

use crate::errors::LyricError;
use crate::models::generation::non_blank;
use crate::models::{GenerationRequest, StructurePlan};
use crate::settings::LINES_PER_BAR;

use super::planner::plan_structure;

/// Section labels the generator may use
pub const SECTION_LABEL_VOCABULARY: [&str; 6] = [
    "[Verse 1]",
    "[Hook]",
    "[Bridge]",
    "[Instrumental]",
    "[Harmonizing]",
    "[Drop]",
];

pub const DEFAULT_MOOD: &str = "determined from subject";
pub const DEFAULT_INFLUENCE: &str = "Contemporary pop/hip-hop fusion";
pub const DEFAULT_AUDIO_TAG: &str = "Modern alternative";
pub const DEFAULT_TITLE_INSTRUCTION: &str = "Generate a compelling title";

/// Which prompt to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTemplate {
    System,
    User,
}

/// Get template content by type
pub fn get_template_content(template: PromptTemplate) -> &'static str {
    match template {
        PromptTemplate::System => include_str!("templates/system.txt.mustache"),
        PromptTemplate::User => include_str!("templates/user.txt.mustache"),
    }
}

/// Rendered prompt pair plus the plan it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPrompt {
    pub system: String,
    pub user: String,
    pub plan: StructurePlan,
}

#[derive(Serialize)]
struct StyleLine<'a> {
    label: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct SectionContext {
    marker: String,
}

#[derive(Serialize)]
struct SystemContext<'a> {
    has_style: bool,
    style_lines: Vec<StyleLine<'a>>,
    verse_count: u32,
    bars_per_verse: u32,
    lines_per_bar: usize,
    chorus_count: u32,
    section_sequence: String,
    label_vocabulary: String,
    sections: Vec<SectionContext>,
}

#[derive(Serialize)]
struct UserContext<'a> {
    subject_matter: &'a str,
    mood: &'a str,
    musical_influence: &'a str,
    audio_tag: &'a str,
    song_title: &'a str,
}

fn render<T: Serialize>(template: PromptTemplate, context: &T) -> Result<String, LyricError> {
    let compiled = mustache::compile_str(get_template_content(template))?;
    Ok(compiled.render_to_string(context)?)
}

/// Validate the request, plan it, and render both prompts
pub fn build_generation_prompt(request: &GenerationRequest) -> Result<GenerationPrompt, LyricError> {
    request.validate().map_err(LyricError::InvalidRequest)?;

    let structure = request.structure;
    let plan = plan_structure(structure.verse_count, structure.chorus_count);

    let style_lines: Vec<StyleLine> = request
        .style_attributes
        .as_ref()
        .map(|attrs| {
            attrs
                .entries()
                .into_iter()
                .map(|(label, value)| StyleLine { label, value })
                .collect()
        })
        .unwrap_or_default();

    let section_sequence = if plan.is_empty() {
        "(no sections)".to_string()
    } else {
        plan.labels().join(" -> ")
    };

    let system = render(
        PromptTemplate::System,
        &SystemContext {
            has_style: !style_lines.is_empty(),
            style_lines,
            verse_count: structure.verse_count,
            bars_per_verse: structure.bars_per_verse,
            lines_per_bar: LINES_PER_BAR,
            chorus_count: structure.chorus_count,
            section_sequence,
            label_vocabulary: SECTION_LABEL_VOCABULARY.join(", "),
            sections: plan.iter().map(|s| SectionContext { marker: s.marker() }).collect(),
        },
    )?;

    let user = render(
        PromptTemplate::User,
        &UserContext {
            subject_matter: request.subject_matter.trim(),
            mood: non_blank(&request.mood).unwrap_or(DEFAULT_MOOD),
            musical_influence: non_blank(&request.musical_influence).unwrap_or(DEFAULT_INFLUENCE),
            audio_tag: non_blank(&request.audio_tag).unwrap_or(DEFAULT_AUDIO_TAG),
            song_title: non_blank(&request.song_title).unwrap_or(DEFAULT_TITLE_INSTRUCTION),
        },
    )?;

    Ok(GenerationPrompt { system, user, plan })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StructureRequest, StyleAttributes};

    fn request() -> GenerationRequest {
        GenerationRequest::new("late night drives", StructureRequest::new(2, 16, 3))
    }

    #[test]
    fn test_system_prompt_carries_structure() {
        let prompt = build_generation_prompt(&request()).unwrap();
        assert!(prompt.system.contains("2 verses with 16 bars each (4 lines per bar)"));
        assert!(prompt.system.contains("3 chorus sections (the LAST chorus MUST be labeled [Bridge])"));
        assert!(prompt
            .system
            .contains("Section order: Verse 1 -> Hook -> Verse 2 -> Hook -> Bridge -> Hook"));
        assert!(prompt.system.contains("[Instrumental], [Harmonizing], [Drop]"));
        assert!(prompt.system.contains("No specific influence data"));
        assert_eq!(prompt.plan, plan_structure(2, 3));
    }

    #[test]
    fn test_output_format_lists_planned_markers() {
        let prompt = build_generation_prompt(&request()).unwrap();
        let format = prompt.system.split("OUTPUT FORMAT:").nth(1).unwrap();
        let markers: Vec<&str> = format
            .lines()
            .map(str::trim)
            .filter(|l| l.starts_with("[Verse") || *l == "[Hook]" || *l == "[Bridge]")
            .collect();
        assert_eq!(
            markers,
            vec!["[Verse 1]", "[Hook]", "[Verse 2]", "[Hook]", "[Bridge]", "[Hook]"]
        );
    }

    #[test]
    fn test_user_prompt_defaults() {
        let prompt = build_generation_prompt(&request()).unwrap();
        assert!(prompt.user.contains("SUBJECT MATTER: late night drives"));
        assert!(prompt.user.contains("MOOD/EMOTION: determined from subject"));
        assert!(prompt.user.contains("MUSICAL STYLE INSPIRATION: Contemporary pop/hip-hop fusion"));
        assert!(prompt.user.contains("AUDIO TAG: Modern alternative"));
        assert!(prompt.user.contains("TITLE: Generate a compelling title"));
    }

    #[test]
    fn test_user_prompt_is_not_html_escaped() {
        let mut req = request();
        req.song_title = Some("Rock & Roll <Forever>".to_string());
        req.mood = Some("bittersweet".to_string());
        let prompt = build_generation_prompt(&req).unwrap();
        assert!(prompt.user.contains("TITLE: Rock & Roll <Forever>"));
        assert!(prompt.user.contains("MOOD/EMOTION: bittersweet"));
    }

    #[test]
    fn test_style_attributes_are_rendered() {
        let mut req = request();
        req.style_attributes = Some(StyleAttributes {
            emotional_tone: "melancholic".to_string(),
            lyrical_themes: "loss".to_string(),
            writing_style: "poetic".to_string(),
            rhyme_pattern: "ABAB".to_string(),
            imagery: "rain, neon".to_string(),
        });
        let prompt = build_generation_prompt(&req).unwrap();
        assert!(prompt.system.contains("- Emotional tone: melancholic"));
        assert!(prompt.system.contains("- Rhyme pattern: ABAB"));
        assert!(!prompt.system.contains("No specific influence data"));
    }

    #[test]
    fn test_invalid_requests_are_rejected() {
        let mut req = request();
        req.subject_matter = "  ".to_string();
        assert!(matches!(
            build_generation_prompt(&req),
            Err(LyricError::InvalidRequest(_))
        ));

        let mut req = request();
        req.structure.bars_per_verse = 6;
        assert!(matches!(
            build_generation_prompt(&req),
            Err(LyricError::InvalidRequest(_))
        ));
    }
}
