//! Word-lookup (rhyme / synonym) types

use serde::{Deserialize, Serialize};

/// Relation requested from the word-lookup service
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum LookupRelation {
    PerfectRhyme,
    NearRhyme,
    Synonym,
}

impl LookupRelation {
    /// Query parameter understood by the word-relation service
    pub fn code(&self) -> &'static str {
        match self {
            LookupRelation::PerfectRhyme => "rel_rhy",
            LookupRelation::NearRhyme => "rel_nry",
            LookupRelation::Synonym => "rel_syn",
        }
    }
}

/// One request the host should issue to the lookup service
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LookupQuery {
    pub relation: LookupRelation,
    pub code: String,
    pub word: String,
    pub max: usize,
}

/// Candidate as returned by the lookup service
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScoredWord {
    pub word: String,
    #[serde(default)]
    pub score: f64,
}

/// Candidate augmented with a locally computed syllable count
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WordSuggestion {
    pub word: String,
    pub score: f64,
    pub syllables: usize,
}
