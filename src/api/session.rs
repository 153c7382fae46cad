//! Editor session API
//!
//! Wraps the global [`EditorSession`]. The host owns all I/O: it asks for a
//! ticket, performs the lookup or generation itself, and hands the raw result
//! back together with the ticket.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{
    deserialize, deserialize_or_default, js_error, lock_monitor, lock_session, serialize,
    with_session,
};
use crate::errors::GatewayError;
use crate::gateway::{lookup_queries, RawLookupResults};
use crate::models::{DocumentStats, GeneratedSong, GenerationRequest, LookupQuery};
use crate::session::{EditorSession, GenerationTicket, LookupTicket};
use crate::settings::EngineSettings;
use crate::structure::GenerationPrompt;
use crate::text::utf16_to_char_index;
use crate::utils::performance::now_ms;
use crate::{wasm_info, wasm_log, wasm_warn};

#[derive(Serialize)]
struct LookupStart {
    ticket: LookupTicket,
    queries: Vec<LookupQuery>,
}

#[derive(Serialize)]
struct GenerationStart {
    ticket: GenerationTicket,
    prompt: GenerationPrompt,
}

/// What happened to a generation result
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationOutcome {
    /// False when the ticket was superseded or the generation failed
    applied: bool,
    song: Option<GeneratedSong>,
    stats: DocumentStats,
    error: Option<String>,
}

fn timed<T>(operation: &str, f: impl FnOnce() -> T) -> T {
    let start = now_ms();
    let value = f();
    let elapsed = now_ms() - start;
    if let Ok(mut monitor) = lock_monitor() {
        monitor.record_measurement(operation, elapsed);
    }
    value
}

fn apply_generation(
    session: &mut EditorSession,
    ticket: &GenerationTicket,
    raw: Result<String, GatewayError>,
) -> Result<JsValue, JsValue> {
    let outcome = match session.complete_generation(ticket, raw) {
        Ok(song) => GenerationOutcome {
            applied: song.is_some(),
            song,
            stats: session.stats().clone(),
            error: None,
        },
        Err(e) => {
            wasm_warn!("generation #{} failed: {}", ticket.id, e);
            GenerationOutcome {
                applied: false,
                song: None,
                stats: session.stats().clone(),
                error: Some(e.to_string()),
            }
        }
    };
    serialize(&outcome, "Failed to serialize generation outcome")
}

/// Create (or replace) the editor session
///
/// `settings_js` may be `undefined` for defaults.
#[wasm_bindgen(js_name = createSession)]
pub fn create_session(settings_js: JsValue) -> Result<JsValue, JsValue> {
    let settings: EngineSettings = deserialize_or_default(settings_js, "Invalid engine settings")?;
    wasm_info!("createSession: {:?}", settings);

    let session = EditorSession::new(settings);
    let snapshot = session.snapshot();
    *lock_session()? = Some(session);
    serialize(&snapshot, "Failed to serialize session snapshot")
}

/// Replace the document text; returns fresh statistics
#[wasm_bindgen(js_name = setDocumentText)]
pub fn set_document_text(text: &str) -> Result<JsValue, JsValue> {
    with_session(|session| {
        let stats = timed("setDocumentText", || session.set_text(text).clone());
        serialize(&stats, "Failed to serialize document stats")
    })
}

/// Per-line feedback for the session's document
#[wasm_bindgen(js_name = getSessionLineFeedback)]
pub fn get_session_line_feedback() -> Result<JsValue, JsValue> {
    with_session(|session| {
        let feedback = timed("getSessionLineFeedback", || session.line_feedback());
        serialize(&feedback, "Failed to serialize line feedback")
    })
}

/// Move the cursor to a textarea `selectionStart` (UTF-16 units)
#[wasm_bindgen(js_name = setCursorPosition)]
pub fn set_cursor_position(cursor: usize) -> Result<JsValue, JsValue> {
    with_session(|session| {
        let index = utf16_to_char_index(session.text(), cursor);
        let update = session.set_cursor(index);
        if update.should_lookup {
            wasm_log!("cursor on '{}', lookup after {}ms", update.word, update.debounce_ms);
        }
        serialize(&update, "Failed to serialize cursor update")
    })
}

/// Ticket and queries for a lookup of `word`; supersedes any outstanding lookup
#[wasm_bindgen(js_name = beginWordLookup)]
pub fn begin_word_lookup(word: &str) -> Result<JsValue, JsValue> {
    with_session(|session| {
        let ticket = session.begin_lookup(word);
        let queries = lookup_queries(&ticket.word, session.settings());
        serialize(&LookupStart { ticket, queries }, "Failed to serialize lookup ticket")
    })
}

/// Rank raw lookup results; `null` when the ticket is stale
#[wasm_bindgen(js_name = resolveWordLookup)]
pub fn resolve_word_lookup(ticket_js: JsValue, raw_js: JsValue) -> Result<JsValue, JsValue> {
    let ticket: LookupTicket = deserialize(ticket_js, "Invalid lookup ticket")?;
    let raw: RawLookupResults = deserialize_or_default(raw_js, "Invalid lookup results")?;
    with_session(|session| {
        let suggestions = timed("resolveWordLookup", || session.resolve_lookup(&ticket, Ok(raw)));
        serialize(&suggestions, "Failed to serialize suggestions")
    })
}

/// Report a failed lookup; current tickets resolve to empty suggestions
#[wasm_bindgen(js_name = failWordLookup)]
pub fn fail_word_lookup(ticket_js: JsValue, message: Option<String>) -> Result<JsValue, JsValue> {
    let ticket: LookupTicket = deserialize(ticket_js, "Invalid lookup ticket")?;
    let error = GatewayError::LookupFailed { message };
    with_session(|session| {
        let suggestions = session.resolve_lookup(&ticket, Err(error));
        serialize(&suggestions, "Failed to serialize suggestions")
    })
}

/// Validate a request and render its prompts; returns `{ticket, prompt}`
#[wasm_bindgen(js_name = beginGeneration)]
pub fn begin_generation(request_js: JsValue) -> Result<JsValue, JsValue> {
    let request: GenerationRequest = deserialize(request_js, "Invalid generation request")?;
    with_session(|session| {
        let (ticket, prompt) = session.begin_generation(&request).map_err(js_error)?;
        wasm_info!("beginGeneration: ticket #{}, {} sections", ticket.id, ticket.plan.len());
        serialize(&GenerationStart { ticket, prompt }, "Failed to serialize generation start")
    })
}

/// Apply raw gateway output for a generation ticket
#[wasm_bindgen(js_name = completeGeneration)]
pub fn complete_generation(ticket_js: JsValue, raw: &str) -> Result<JsValue, JsValue> {
    let ticket: GenerationTicket = deserialize(ticket_js, "Invalid generation ticket")?;
    with_session(|session| {
        timed("completeGeneration", || apply_generation(session, &ticket, Ok(raw.to_string())))
    })
}

/// Report a failed generation; the document is left untouched
#[wasm_bindgen(js_name = failGeneration)]
pub fn fail_generation(ticket_js: JsValue, message: Option<String>) -> Result<JsValue, JsValue> {
    let ticket: GenerationTicket = deserialize(ticket_js, "Invalid generation ticket")?;
    let error = GatewayError::GenerationFailed { message };
    with_session(|session| apply_generation(session, &ticket, Err(error)))
}

/// Append a chosen suggestion to the document
#[wasm_bindgen(js_name = insertSuggestion)]
pub fn insert_suggestion(word: &str) -> Result<JsValue, JsValue> {
    with_session(|session| {
        let stats = session.insert_suggestion(word).clone();
        serialize(&stats, "Failed to serialize document stats")
    })
}

#[wasm_bindgen(js_name = getSessionSnapshot)]
pub fn get_session_snapshot() -> Result<JsValue, JsValue> {
    with_session(|session| serialize(&session.snapshot(), "Failed to serialize session snapshot"))
}

/// Timings of the session's per-keystroke operations
#[wasm_bindgen(js_name = getPerformanceSummary)]
pub fn get_performance_summary() -> Result<JsValue, JsValue> {
    let monitor = lock_monitor()?;
    serialize(&monitor.summary(), "Failed to serialize performance summary")
}
