//! Data models for the songwriting engine
//!
//! Plain serde types shared by the analysis, planning, post-processing and
//! session layers, and serialized across the WASM boundary.

pub mod generation;
pub mod stats;
pub mod structure;
pub mod suggestion;

pub use generation::{GeneratedSong, GenerationRequest, SongMetadata, StyleAttributes};
pub use stats::{DocumentStats, LineFeedback};
pub use structure::{SectionTag, StructurePlan, StructureRequest};
pub use suggestion::{LookupQuery, LookupRelation, ScoredWord, WordSuggestion};
