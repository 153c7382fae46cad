//! External collaborator seams
//!
//! The engine never talks to the network. A host implements
//! [`GenerationGateway`] and [`WordLookupGateway`] (or performs the calls
//! itself and feeds raw results back through [`finish_generation`] and
//! [`rank_suggestions`]).

use serde::{Deserialize, Serialize};

use crate::errors::{GatewayError, LyricError};
use crate::models::{
    GeneratedSong, GenerationRequest, LookupQuery, LookupRelation, ScoredWord, StructurePlan,
    WordSuggestion,
};
use crate::postprocess::{extract_metadata, Redactor};
use crate::settings::EngineSettings;
use crate::structure::{build_generation_prompt, GenerationPrompt};
use crate::syllables::SyllableEstimator;

/// Produces raw lyric text for a rendered prompt
pub trait GenerationGateway {
    fn generate(
        &self,
        request: &GenerationRequest,
        prompt: &GenerationPrompt,
    ) -> Result<String, GatewayError>;
}

/// Returns scored candidates related to a word
pub trait WordLookupGateway {
    fn lookup(&self, query: &LookupQuery) -> Result<Vec<ScoredWord>, GatewayError>;
}

/// Ranked suggestions for one word, grouped by relation
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct WordSuggestions {
    pub word: String,
    pub perfect: Vec<WordSuggestion>,
    pub near: Vec<WordSuggestion>,
    pub synonyms: Vec<WordSuggestion>,
}

/// Raw candidates for one word as fetched by the host
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct RawLookupResults {
    pub perfect: Vec<ScoredWord>,
    pub near: Vec<ScoredWord>,
    pub synonyms: Vec<ScoredWord>,
}

impl RawLookupResults {
    /// Rank every relation with the configured limits
    pub fn rank(
        self,
        estimator: &SyllableEstimator,
        settings: &EngineSettings,
        word: &str,
    ) -> WordSuggestions {
        WordSuggestions {
            word: word.to_string(),
            perfect: rank_suggestions(estimator, Ok(self.perfect), settings.perfect_rhyme_limit),
            near: rank_suggestions(estimator, Ok(self.near), settings.near_rhyme_limit),
            synonyms: rank_suggestions(estimator, Ok(self.synonyms), settings.synonym_limit),
        }
    }
}

/// Queries to issue for a word; empty when the word is too short
pub fn lookup_queries(word: &str, settings: &EngineSettings) -> Vec<LookupQuery> {
    let word = word.trim();
    if word.chars().count() < settings.min_lookup_word_length || word.is_empty() {
        return Vec::new();
    }
    [
        (LookupRelation::PerfectRhyme, settings.perfect_rhyme_limit),
        (LookupRelation::NearRhyme, settings.near_rhyme_limit),
        (LookupRelation::Synonym, settings.synonym_limit),
    ]
    .into_iter()
    .map(|(relation, max)| LookupQuery {
        relation,
        code: relation.code().to_string(),
        word: word.to_string(),
        max,
    })
    .collect()
}

/// Rank a raw lookup result
///
/// A failed lookup is an empty list. Blank words and NaN scores are dropped;
/// the rest are ordered by descending score (ties keep service order), capped
/// at `limit`, and given a locally computed syllable count.
pub fn rank_suggestions(
    estimator: &SyllableEstimator,
    result: Result<Vec<ScoredWord>, GatewayError>,
    limit: usize,
) -> Vec<WordSuggestion> {
    let mut candidates = match result {
        Ok(candidates) => candidates,
        Err(e) => {
            log::warn!("word lookup failed, showing no suggestions: {}", e);
            return Vec::new();
        }
    };

    candidates.retain(|c| !c.word.trim().is_empty() && !c.score.is_nan());
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(limit);

    candidates
        .into_iter()
        .map(|c| WordSuggestion {
            syllables: estimator.count(&c.word),
            word: c.word,
            score: c.score,
        })
        .collect()
}

/// Run every lookup for a word through a gateway
pub fn lookup_word<G: WordLookupGateway + ?Sized>(
    gateway: &G,
    estimator: &SyllableEstimator,
    settings: &EngineSettings,
    word: &str,
) -> WordSuggestions {
    let mut suggestions = WordSuggestions {
        word: word.trim().to_string(),
        ..Default::default()
    };
    for query in lookup_queries(word, settings) {
        let ranked = rank_suggestions(estimator, gateway.lookup(&query), query.max);
        match query.relation {
            LookupRelation::PerfectRhyme => suggestions.perfect = ranked,
            LookupRelation::NearRhyme => suggestions.near = ranked,
            LookupRelation::Synonym => suggestions.synonyms = ranked,
        }
    }
    suggestions
}

/// Post-process a raw generation result
///
/// Failures pass through; blank output counts as a malformed response.
/// Successful text is redacted before metadata is read from it.
pub fn finish_generation(
    redactor: &Redactor,
    plan: StructurePlan,
    raw: Result<String, GatewayError>,
) -> Result<GeneratedSong, GatewayError> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return Err(GatewayError::generation("empty response"));
    }

    let lyrics = redactor.redact(&raw);
    let metadata = extract_metadata(&lyrics);

    Ok(GeneratedSong {
        lyrics,
        metadata,
        plan,
    })
}

/// Validate → plan → prompt → gateway → post-process
pub fn generate_song<G: GenerationGateway + ?Sized>(
    gateway: &G,
    redactor: &Redactor,
    request: &GenerationRequest,
) -> Result<GeneratedSong, LyricError> {
    let prompt = build_generation_prompt(request)?;
    log::debug!("requesting generation for {} planned sections", prompt.plan.len());
    let raw = gateway.generate(request, &prompt);
    Ok(finish_generation(redactor, prompt.plan.clone(), raw)?)
}
