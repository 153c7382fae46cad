//! Banned-name redaction for generated lyrics
//!
//! All denylisted names are compiled into one case-insensitive,
//! word-bounded alternation so a single pass replaces every match and a
//! replacement is never rescanned.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::errors::LyricError;
use crate::settings::DEFAULT_REDACTION_REPLACEMENT;

const DEFAULT_DENYLIST_YAML: &str = include_str!("denylist.yaml");

static DEFAULT_REDACTOR: Lazy<Option<Redactor>> = Lazy::new(|| {
    let names: Vec<String> = match serde_yaml::from_str(DEFAULT_DENYLIST_YAML) {
        Ok(names) => names,
        Err(e) => {
            log::error!("built-in denylist failed to parse: {}", e);
            return None;
        }
    };
    match Redactor::new(&names, DEFAULT_REDACTION_REPLACEMENT) {
        Ok(redactor) => Some(redactor),
        Err(e) => {
            log::error!("built-in denylist failed to compile: {}", e);
            None
        }
    }
});

/// Compiled denylist with its replacement text
#[derive(Debug, Clone)]
pub struct Redactor {
    pattern: Option<Regex>,
    replacement: String,
}

impl Redactor {
    /// Compile a denylist
    ///
    /// Longer names come first in the alternation so a name that contains
    /// another one wins at the same position.
    pub fn new<S: AsRef<str>>(names: &[S], replacement: &str) -> Result<Self, LyricError> {
        let mut names: Vec<&str> = names
            .iter()
            .map(|n| n.as_ref().trim())
            .filter(|n| !n.is_empty())
            .collect();
        names.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        names.dedup();

        let pattern = if names.is_empty() {
            None
        } else {
            let alternation = names
                .iter()
                .map(|n| regex::escape(n))
                .collect::<Vec<_>>()
                .join("|");
            let compiled = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
                .map_err(|e| LyricError::Data(e.to_string()))?;
            Some(compiled)
        };

        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// Redactor that never matches
    pub fn empty(replacement: &str) -> Self {
        Self {
            pattern: None,
            replacement: replacement.to_string(),
        }
    }

    /// Same denylist, different replacement text
    pub fn with_replacement(&self, replacement: &str) -> Self {
        Self {
            pattern: self.pattern.clone(),
            replacement: replacement.to_string(),
        }
    }

    /// Built-in denylist with the default replacement
    pub fn builtin() -> Option<&'static Redactor> {
        DEFAULT_REDACTOR.as_ref()
    }

    /// Replace every denylisted name
    pub fn redact(&self, text: &str) -> String {
        match &self.pattern {
            Some(pattern) => {
                let cleaned = pattern.replace_all(text, NoExpand(&self.replacement));
                if cleaned != text {
                    log::debug!("redacted denylisted names from generated text");
                }
                cleaned.into_owned()
            }
            None => text.to_string(),
        }
    }
}

/// Redact with the built-in denylist and replacement
pub fn sanitize(text: &str) -> String {
    match Redactor::builtin() {
        Some(redactor) => redactor.redact(text),
        None => text.to_string(),
    }
}
