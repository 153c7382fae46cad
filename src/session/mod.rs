//! Editor session state
//!
//! One session owns the document text for one editor. Statistics are
//! recomputed synchronously on every edit; external lookups and generations
//! are tracked with tickets so late results for superseded requests are
//! dropped instead of applied.

use serde::{Deserialize, Serialize};

use crate::errors::{GatewayError, LyricError};
use crate::gateway::{finish_generation, GenerationGateway, RawLookupResults, WordSuggestions};
use crate::models::{DocumentStats, GeneratedSong, GenerationRequest, LineFeedback, StructurePlan};
use crate::postprocess::Redactor;
use crate::settings::EngineSettings;
use crate::structure::{build_generation_prompt, GenerationPrompt};
use crate::syllables::SyllableEstimator;
use crate::text::{current_word_at, document_stats, line_feedback};

/// Identifies one word lookup and the word it was issued for
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LookupTicket {
    pub id: u64,
    pub word: String,
}

/// Identifies one generation request
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GenerationTicket {
    pub id: u64,
    pub plan: StructurePlan,
}

/// Result of moving the cursor
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CursorUpdate {
    pub word: String,
    pub changed: bool,
    /// True when the caller should schedule a lookup for `word`
    pub should_lookup: bool,
    /// How long the caller should wait for the cursor to settle first
    pub debounce_ms: u32,
}

/// Serializable view of the session
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub text: String,
    pub cursor: usize,
    pub current_word: String,
    pub stats: DocumentStats,
    pub generation_pending: bool,
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    text: String,
    cursor: usize,
    current_word: String,
    /// Word last reported by `set_cursor`; edits do not touch it
    reported_word: String,
    stats: DocumentStats,
    settings: EngineSettings,
    estimator: SyllableEstimator<'static>,
    redactor: Redactor,
    last_lookup_id: u64,
    last_generation_id: u64,
    pending_generation: Option<u64>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

impl EditorSession {
    pub fn new(settings: EngineSettings) -> Self {
        let estimator = SyllableEstimator::default();
        let redactor = match Redactor::builtin() {
            Some(builtin) => builtin.with_replacement(&settings.redaction_replacement),
            None => Redactor::empty(&settings.redaction_replacement),
        };
        Self {
            text: String::new(),
            cursor: 0,
            current_word: String::new(),
            reported_word: String::new(),
            stats: document_stats(&estimator, ""),
            settings,
            estimator,
            redactor,
            last_lookup_id: 0,
            last_generation_id: 0,
            pending_generation: None,
        }
    }

    pub fn with_text(settings: EngineSettings, text: &str) -> Self {
        let mut session = Self::new(settings);
        session.set_text(text);
        session
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    pub fn stats(&self) -> &DocumentStats {
        &self.stats
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn estimator(&self) -> &SyllableEstimator<'static> {
        &self.estimator
    }

    pub fn is_generation_pending(&self) -> bool {
        self.pending_generation.is_some()
    }

    /// Replace the document text and recompute statistics immediately
    pub fn set_text(&mut self, text: &str) -> &DocumentStats {
        self.text = text.to_string();
        self.stats = document_stats(&self.estimator, &self.text);
        self.cursor = self.cursor.min(self.text.chars().count());
        self.current_word = current_word_at(&self.text, self.cursor);
        &self.stats
    }

    /// Per-line syllable feedback for the current text
    pub fn line_feedback(&self) -> Vec<LineFeedback> {
        line_feedback(&self.estimator, &self.text)
    }

    /// Move the cursor (character index) and report the word under it
    ///
    /// `changed` compares against the word this method last reported, so
    /// typing into a word (`set_text` then `set_cursor`) still registers.
    pub fn set_cursor(&mut self, cursor: usize) -> CursorUpdate {
        self.cursor = cursor.min(self.text.chars().count());
        let word = current_word_at(&self.text, self.cursor);
        let changed = word != self.reported_word;
        self.current_word = word.clone();
        self.reported_word = word.clone();

        CursorUpdate {
            should_lookup: changed
                && word.chars().count() >= self.settings.min_lookup_word_length,
            word,
            changed,
            debounce_ms: self.settings.lookup_debounce_ms,
        }
    }

    /// Issue a ticket for a lookup of `word`; supersedes earlier tickets
    pub fn begin_lookup(&mut self, word: &str) -> LookupTicket {
        self.last_lookup_id += 1;
        LookupTicket {
            id: self.last_lookup_id,
            word: word.trim().to_lowercase(),
        }
    }

    /// True if a result for this ticket should still be shown
    pub fn is_current_lookup(&self, ticket: &LookupTicket) -> bool {
        ticket.id == self.last_lookup_id && ticket.word == self.current_word
    }

    /// Rank a lookup result, or `None` if the ticket is stale
    ///
    /// A failed lookup for a current ticket yields empty suggestions.
    pub fn resolve_lookup(
        &self,
        ticket: &LookupTicket,
        result: Result<RawLookupResults, GatewayError>,
    ) -> Option<WordSuggestions> {
        if !self.is_current_lookup(ticket) {
            log::debug!(
                "discarding stale lookup #{} for '{}' (current word '{}')",
                ticket.id,
                ticket.word,
                self.current_word
            );
            return None;
        }

        let raw = result.unwrap_or_else(|e| {
            log::warn!("lookup for '{}' failed: {}", ticket.word, e);
            RawLookupResults::default()
        });
        Some(raw.rank(&self.estimator, &self.settings, &ticket.word))
    }

    /// Validate and render a generation request; supersedes any pending one
    pub fn begin_generation(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<(GenerationTicket, GenerationPrompt), LyricError> {
        let prompt = build_generation_prompt(request)?;
        self.last_generation_id += 1;
        self.pending_generation = Some(self.last_generation_id);
        let ticket = GenerationTicket {
            id: self.last_generation_id,
            plan: prompt.plan.clone(),
        };
        Ok((ticket, prompt))
    }

    /// Apply a generation result
    ///
    /// Returns `Ok(None)` for a superseded ticket. On failure the document is
    /// left exactly as it was.
    pub fn complete_generation(
        &mut self,
        ticket: &GenerationTicket,
        raw: Result<String, GatewayError>,
    ) -> Result<Option<GeneratedSong>, GatewayError> {
        if self.pending_generation != Some(ticket.id) {
            log::debug!("discarding superseded generation #{}", ticket.id);
            return Ok(None);
        }
        self.pending_generation = None;

        let song = finish_generation(&self.redactor, ticket.plan.clone(), raw)?;
        self.set_text(&song.lyrics);
        Ok(Some(song))
    }

    /// Run a whole generation synchronously through a gateway
    pub fn generate_with<G: GenerationGateway + ?Sized>(
        &mut self,
        gateway: &G,
        request: &GenerationRequest,
    ) -> Result<Option<GeneratedSong>, LyricError> {
        let (ticket, prompt) = self.begin_generation(request)?;
        let raw = gateway.generate(request, &prompt);
        Ok(self.complete_generation(&ticket, raw)?)
    }

    /// Append a suggested word to the document
    pub fn insert_suggestion(&mut self, word: &str) -> &DocumentStats {
        let text = format!("{} {}", self.text, word.trim());
        self.set_text(&text)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            text: self.text.clone(),
            cursor: self.cursor,
            current_word: self.current_word.clone(),
            stats: self.stats.clone(),
            generation_pending: self.is_generation_pending(),
        }
    }
}
