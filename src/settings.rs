//! Engine settings and fixed constants
//!
//! The bar and tempo constants are part of the statistics contract and are
//! not configurable. Everything in [`EngineSettings`] is a caller-side policy
//! knob with a sensible default.

use serde::{Deserialize, Serialize};

use crate::errors::LyricError;

/// Lyric lines per bar
pub const LINES_PER_BAR: usize = 4;

/// Assumed performance tempo, seconds per bar
pub const SECONDS_PER_BAR: f64 = 1.5;

/// Debounce before a word lookup fires (ms)
pub const DEFAULT_LOOKUP_DEBOUNCE_MS: u32 = 300;

/// Debounce before the document is persisted (ms)
pub const DEFAULT_AUTOSAVE_DEBOUNCE_MS: u32 = 2000;

/// Shortest word that triggers a lookup
pub const DEFAULT_MIN_LOOKUP_WORD_LENGTH: usize = 2;

pub const DEFAULT_PERFECT_RHYME_LIMIT: usize = 20;
pub const DEFAULT_NEAR_RHYME_LIMIT: usize = 15;
pub const DEFAULT_SYNONYM_LIMIT: usize = 15;

/// Text substituted for redacted names
pub const DEFAULT_REDACTION_REPLACEMENT: &str = "the artist";

/// Host-tunable engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineSettings {
    /// Debounce hint for word lookups. Statistics are never debounced.
    pub lookup_debounce_ms: u32,

    /// Debounce hint for persisting the document
    pub autosave_debounce_ms: u32,

    /// Words shorter than this never trigger a lookup
    pub min_lookup_word_length: usize,

    pub perfect_rhyme_limit: usize,
    pub near_rhyme_limit: usize,
    pub synonym_limit: usize,

    /// Replacement text for denylisted names
    pub redaction_replacement: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            lookup_debounce_ms: DEFAULT_LOOKUP_DEBOUNCE_MS,
            autosave_debounce_ms: DEFAULT_AUTOSAVE_DEBOUNCE_MS,
            min_lookup_word_length: DEFAULT_MIN_LOOKUP_WORD_LENGTH,
            perfect_rhyme_limit: DEFAULT_PERFECT_RHYME_LIMIT,
            near_rhyme_limit: DEFAULT_NEAR_RHYME_LIMIT,
            synonym_limit: DEFAULT_SYNONYM_LIMIT,
            redaction_replacement: DEFAULT_REDACTION_REPLACEMENT.to_string(),
        }
    }
}

impl EngineSettings {
    /// Parse settings from YAML; missing keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LyricError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.lookup_debounce_ms, 300);
        assert_eq!(settings.autosave_debounce_ms, 2000);
        assert_eq!(settings.min_lookup_word_length, 2);
        assert_eq!(settings.perfect_rhyme_limit, 20);
        assert_eq!(settings.near_rhyme_limit, 15);
        assert_eq!(settings.synonym_limit, 15);
        assert_eq!(settings.redaction_replacement, "the artist");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = EngineSettings::from_yaml_str("lookupDebounceMs: 500\nsynonymLimit: 5\n").unwrap();
        assert_eq!(settings.lookup_debounce_ms, 500);
        assert_eq!(settings.synonym_limit, 5);
        assert_eq!(settings.near_rhyme_limit, 15);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(EngineSettings::from_yaml_str("").unwrap(), EngineSettings::default());
    }

    #[test]
    fn test_bad_yaml_is_data_error() {
        let err = EngineSettings::from_yaml_str("lookupDebounceMs: [1, 2]").unwrap_err();
        assert!(matches!(err, LyricError::Data(_)));
    }
}
