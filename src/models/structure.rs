//! Song structure types
//!
//! A [`StructureRequest`] holds the user-controlled counts; the planner turns
//! it into a [`StructurePlan`], the ordered list of [`SectionTag`]s shared by
//! the preview chips and the generation prompt.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::settings::LINES_PER_BAR;

/// User-controlled structure parameters
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StructureRequest {
    pub verse_count: u32,
    /// Always a multiple of 4 when it reaches the prompt builder
    pub bars_per_verse: u32,
    pub chorus_count: u32,
}

impl Default for StructureRequest {
    fn default() -> Self {
        Self {
            verse_count: 2,
            bars_per_verse: 16,
            chorus_count: 3,
        }
    }
}

impl StructureRequest {
    pub fn new(verse_count: u32, bars_per_verse: u32, chorus_count: u32) -> Self {
        Self {
            verse_count,
            bars_per_verse,
            chorus_count,
        }
    }

    /// Check the bar invariant
    pub fn validate(&self) -> Result<(), String> {
        if self.bars_per_verse % LINES_PER_BAR as u32 != 0 {
            return Err(format!(
                "bars per verse must be a multiple of {} (got {})",
                LINES_PER_BAR, self.bars_per_verse
            ));
        }
        Ok(())
    }
}

/// One section of a planned song
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "number", rename_all = "lowercase")]
pub enum SectionTag {
    Verse(u32),
    Hook,
    Bridge,
}

impl SectionTag {
    /// Full label, e.g. `Verse 1`
    pub fn label(&self) -> String {
        match self {
            SectionTag::Verse(n) => format!("Verse {}", n),
            SectionTag::Hook => "Hook".to_string(),
            SectionTag::Bridge => "Bridge".to_string(),
        }
    }

    /// Compact chip label, e.g. `V1`
    pub fn chip_label(&self) -> String {
        match self {
            SectionTag::Verse(n) => format!("V{}", n),
            SectionTag::Hook => "Hook".to_string(),
            SectionTag::Bridge => "Bridge".to_string(),
        }
    }

    /// Bracketed section-label line, e.g. `[Verse 1]`
    pub fn marker(&self) -> String {
        format!("[{}]", self.label())
    }
}

impl fmt::Display for SectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Ordered section sequence derived from a [`StructureRequest`]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct StructurePlan {
    pub sections: Vec<SectionTag>,
}

impl StructurePlan {
    pub fn labels(&self) -> Vec<String> {
        self.sections.iter().map(SectionTag::label).collect()
    }

    pub fn chip_labels(&self) -> Vec<String> {
        self.sections.iter().map(SectionTag::chip_label).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectionTag> {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_labels() {
        assert_eq!(SectionTag::Verse(2).label(), "Verse 2");
        assert_eq!(SectionTag::Verse(2).chip_label(), "V2");
        assert_eq!(SectionTag::Hook.marker(), "[Hook]");
        assert_eq!(SectionTag::Bridge.to_string(), "Bridge");
    }

    #[test]
    fn test_request_validation() {
        assert!(StructureRequest::new(2, 16, 3).validate().is_ok());
        assert!(StructureRequest::new(2, 0, 3).validate().is_ok());
        assert!(StructureRequest::new(2, 10, 3).validate().is_err());
    }

    #[test]
    fn test_request_serde_camel_case() {
        let request: StructureRequest =
            serde_json::from_str(r#"{"verseCount":1,"barsPerVerse":8,"chorusCount":2}"#).unwrap();
        assert_eq!(request, StructureRequest::new(1, 8, 2));
    }
}
