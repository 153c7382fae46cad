//! Shared helpers for WASM API operations
//!
//! Console logging, serialization/deserialization across the JS boundary,
//! error conversion, and access to the session store.

use std::fmt::Display;
use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::session::EditorSession;
use crate::utils::PerformanceMonitor;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Deserialize an optional value; `undefined`/`null` yield the default
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    // plain objects instead of ES Maps for structs with flattened fields
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log an error and convert it to a JsValue
pub fn js_error(e: impl Display) -> JsValue {
    let msg = e.to_string();
    crate::wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}

// ============================================================================
// Session Store
// ============================================================================

lazy_static! {
    static ref SESSION: Mutex<Option<EditorSession>> = Mutex::new(None);
    static ref MONITOR: Mutex<PerformanceMonitor> = Mutex::new(PerformanceMonitor::new());
}

pub fn lock_session() -> Result<MutexGuard<'static, Option<EditorSession>>, JsValue> {
    SESSION
        .lock()
        .map_err(|e| js_error(format!("Session lock poisoned: {}", e)))
}

/// Run `f` against the active session
pub fn with_session<T>(f: impl FnOnce(&mut EditorSession) -> Result<T, JsValue>) -> Result<T, JsValue> {
    let mut guard = lock_session()?;
    let session = guard
        .as_mut()
        .ok_or_else(|| js_error("No session created (call createSession first)"))?;
    f(session)
}

pub fn lock_monitor() -> Result<MutexGuard<'static, PerformanceMonitor>, JsValue> {
    MONITOR
        .lock()
        .map_err(|e| js_error(format!("Performance monitor lock poisoned: {}", e)))
}
