//! WASM build test
//!
//! Exercises the JavaScript-facing exports in a browser.

#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use lyricist_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn test_count_syllables() {
    assert_eq!(count_syllables("tonight"), 2);
    assert_eq!(count_line_syllables("[Hook]"), 0);
}

#[wasm_bindgen_test]
fn test_document_stats_export() {
    let stats = get_document_stats("[Verse 1]\nthe fire inside").unwrap();
    assert_eq!(field(&stats, "syllables").as_f64(), Some(5.0));
    assert_eq!(field(&stats, "duration").as_string().as_deref(), Some("~0:02"));
}

#[wasm_bindgen_test]
fn test_current_word_uses_utf16_offsets() {
    assert_eq!(get_current_word("🔥 fire", 3), "fire");
}

#[wasm_bindgen_test]
fn test_plan_structure_export() {
    let preview = plan_structure(2, 3).unwrap();
    let labels = js_sys::Array::from(&field(&preview, "labels"));
    assert_eq!(labels.length(), 6);
    assert_eq!(field(&preview, "summary").as_string().as_deref(), Some("2 Hooks + Bridge"));
}

#[wasm_bindgen_test]
fn test_sanitize_export() {
    assert_eq!(sanitize_lyrics("like Drake"), "like the artist");
}

#[wasm_bindgen_test]
fn test_session_flow() {
    create_session(JsValue::UNDEFINED).unwrap();
    let stats = set_document_text("city night").unwrap();
    assert_eq!(field(&stats, "words").as_f64(), Some(2.0));

    let update = set_cursor_position(7).unwrap();
    assert_eq!(field(&update, "word").as_string().as_deref(), Some("night"));
    assert_eq!(field(&update, "shouldLookup").as_bool(), Some(true));

    let start = begin_word_lookup("night").unwrap();
    let ticket = field(&start, "ticket");
    let suggestions = resolve_word_lookup(ticket, JsValue::UNDEFINED).unwrap();
    assert!(!suggestions.is_null());

    let summary = get_performance_summary().unwrap();
    assert!(js_sys::Array::is_array(&summary));
}

#[wasm_bindgen_test]
fn test_generation_failure_keeps_text() {
    create_session(JsValue::UNDEFINED).unwrap();
    set_document_text("keep me").unwrap();

    let request = js_sys::Object::new();
    Reflect::set(&request, &"subjectMatter".into(), &"rain".into()).unwrap();
    let start = begin_generation(request.into()).unwrap();
    let outcome = fail_generation(field(&start, "ticket"), Some("offline".to_string())).unwrap();

    assert_eq!(field(&outcome, "applied").as_bool(), Some(false));
    let snapshot = get_session_snapshot().unwrap();
    assert_eq!(field(&snapshot, "text").as_string().as_deref(), Some("keep me"));
}
