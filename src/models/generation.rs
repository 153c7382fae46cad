//! Generation request and result types

use serde::{Deserialize, Serialize};

use super::structure::{StructurePlan, StructureRequest};

/// Style attributes produced by influence analysis
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StyleAttributes {
    pub emotional_tone: String,
    pub lyrical_themes: String,
    pub writing_style: String,
    pub rhyme_pattern: String,
    pub imagery: String,
}

impl StyleAttributes {
    /// `(label, value)` pairs in prompt order
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("Emotional tone", self.emotional_tone.as_str()),
            ("Lyrical themes", self.lyrical_themes.as_str()),
            ("Writing style", self.writing_style.as_str()),
            ("Rhyme pattern", self.rhyme_pattern.as_str()),
            ("Imagery", self.imagery.as_str()),
        ]
    }
}

/// Structured songwriting request passed to the generation gateway
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub subject_matter: String,
    #[serde(default)]
    pub musical_influence: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub structure: StructureRequest,
    #[serde(default)]
    pub audio_tag: Option<String>,
    #[serde(default)]
    pub song_title: Option<String>,
    #[serde(default)]
    pub style_attributes: Option<StyleAttributes>,
}

impl GenerationRequest {
    pub fn new(subject_matter: impl Into<String>, structure: StructureRequest) -> Self {
        Self {
            subject_matter: subject_matter.into(),
            structure,
            ..Default::default()
        }
    }

    /// Subject must be non-blank and bars per verse a multiple of 4
    pub fn validate(&self) -> Result<(), String> {
        if self.subject_matter.trim().is_empty() {
            return Err("subject matter is required".to_string());
        }
        self.structure.validate()
    }
}

/// Metadata markers found in generated text
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SongMetadata {
    pub song_title: Option<String>,
    pub audio_tag: Option<String>,
    pub image_prompt: Option<String>,
}

/// Post-processed generation output, ready to become the document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSong {
    pub lyrics: String,
    pub metadata: SongMetadata,
    pub plan: StructurePlan,
}

/// Non-empty trimmed value, or `None`
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
