//! Structure planning, prompt building and post-processing API

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_or_default, js_error, serialize};
use crate::gateway::{self, RawLookupResults};
use crate::models::{GenerationRequest, ScoredWord};
use crate::postprocess;
use crate::settings::EngineSettings;
use crate::structure;
use crate::syllables::SyllableEstimator;
use crate::{wasm_info, wasm_warn};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StructurePreview {
    labels: Vec<String>,
    chips: Vec<String>,
    summary: String,
}

/// Planned section sequence plus preview labels
#[wasm_bindgen(js_name = planStructure)]
pub fn plan_structure(verse_count: u32, chorus_count: u32) -> Result<JsValue, JsValue> {
    let plan = structure::plan_structure(verse_count, chorus_count);
    let preview = StructurePreview {
        labels: plan.labels(),
        chips: plan.chip_labels(),
        summary: structure::describe_chorus_count(chorus_count),
    };
    serialize(&preview, "Failed to serialize structure plan")
}

#[wasm_bindgen(js_name = describeChorusCount)]
pub fn describe_chorus_count(chorus_count: u32) -> String {
    structure::describe_chorus_count(chorus_count)
}

/// Render `{system, user, plan}` for a generation request
#[wasm_bindgen(js_name = buildGenerationPrompt)]
pub fn build_generation_prompt(request_js: JsValue) -> Result<JsValue, JsValue> {
    let request: GenerationRequest = deserialize(request_js, "Invalid generation request")?;
    wasm_info!(
        "buildGenerationPrompt: {} verses, {} bars, {} choruses",
        request.structure.verse_count,
        request.structure.bars_per_verse,
        request.structure.chorus_count
    );
    let prompt = structure::build_generation_prompt(&request).map_err(js_error)?;
    serialize(&prompt, "Failed to serialize prompt")
}

/// Offline skeleton document following the planned structure
#[wasm_bindgen(js_name = buildLyricScaffold)]
pub fn build_lyric_scaffold(request_js: JsValue) -> Result<String, JsValue> {
    let request: GenerationRequest = deserialize(request_js, "Invalid generation request")?;
    Ok(structure::build_lyric_scaffold(&request))
}

#[wasm_bindgen(js_name = sanitizeLyrics)]
pub fn sanitize_lyrics(text: &str) -> String {
    postprocess::sanitize(text)
}

#[wasm_bindgen(js_name = extractSongMetadata)]
pub fn extract_song_metadata(text: &str) -> Result<JsValue, JsValue> {
    serialize(&postprocess::extract_metadata(text), "Failed to serialize metadata")
}

#[wasm_bindgen(js_name = extractStyleAttributes)]
pub fn extract_style_attributes(analysis: &str) -> Result<JsValue, JsValue> {
    serialize(
        &postprocess::extract_style_attributes(analysis),
        "Failed to serialize style attributes",
    )
}

/// Lookups the host should issue for a word
///
/// `settings_js` may be `undefined` for defaults.
#[wasm_bindgen(js_name = getLookupQueries)]
pub fn get_lookup_queries(word: &str, settings_js: JsValue) -> Result<JsValue, JsValue> {
    let settings: EngineSettings = deserialize_or_default(settings_js, "Invalid engine settings")?;
    serialize(&gateway::lookup_queries(word, &settings), "Failed to serialize lookup queries")
}

/// Rank one relation's raw candidates
///
/// Anything that does not parse as `[{word, score}]` is treated as a failed
/// lookup and ranks to an empty list.
#[wasm_bindgen(js_name = rankWordSuggestions)]
pub fn rank_word_suggestions(raw_js: JsValue, limit: usize) -> Result<JsValue, JsValue> {
    let raw: Result<Vec<ScoredWord>, _> = serde_wasm_bindgen::from_value(raw_js).map_err(|e| {
        wasm_warn!("rankWordSuggestions: malformed lookup result: {}", e);
        crate::errors::GatewayError::lookup(e.to_string())
    });
    let ranked = gateway::rank_suggestions(&SyllableEstimator::default(), raw, limit);
    serialize(&ranked, "Failed to serialize suggestions")
}

/// Rank all three relations at once with the given settings
#[wasm_bindgen(js_name = rankLookupResults)]
pub fn rank_lookup_results(word: &str, raw_js: JsValue, settings_js: JsValue) -> Result<JsValue, JsValue> {
    let settings: EngineSettings = deserialize_or_default(settings_js, "Invalid engine settings")?;
    let raw: RawLookupResults = deserialize_or_default(raw_js, "Invalid lookup results")?;
    let suggestions = raw.rank(&SyllableEstimator::default(), &settings, word);
    serialize(&suggestions, "Failed to serialize suggestions")
}
