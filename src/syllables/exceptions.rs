//! Syllable exception table
//!
//! Maps a normalized (lowercase, letters-only) word to its exact syllable
//! count. The built-in table is parsed once from `exceptions.yaml` and shared
//! read-only for the life of the process.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::LyricError;

const DEFAULT_EXCEPTIONS_YAML: &str = include_str!("exceptions.yaml");

static DEFAULT_TABLE: Lazy<ExceptionTable> = Lazy::new(|| {
    let table = ExceptionTable::from_yaml_str(DEFAULT_EXCEPTIONS_YAML).unwrap_or_else(|e| {
        log::error!("built-in syllable exception table failed to parse: {}", e);
        ExceptionTable::default()
    });
    if table.is_empty() {
        log::warn!("no syllable exceptions loaded, using the heuristic only");
    } else {
        log::debug!("loaded {} syllable exceptions", table.len());
    }
    table
});

/// Read-only word → syllable count overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExceptionTable {
    entries: HashMap<String, usize>,
}

impl ExceptionTable {
    /// The built-in table
    pub fn builtin() -> &'static ExceptionTable {
        &DEFAULT_TABLE
    }

    /// Parse a YAML mapping of `word: count`
    ///
    /// Keys are normalized the same way the estimator normalizes words, so
    /// `Britain` and `britain` land on the same entry.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LyricError> {
        let raw: HashMap<String, usize> = serde_yaml::from_str(yaml)?;
        Ok(Self::from_pairs(raw))
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(word, count)| (normalize_key(word.as_ref()), count))
            .filter(|(word, _)| !word.is_empty())
            .collect();
        Self { entries }
    }

    /// Look up an already-normalized word
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_key(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
