//! Lyricist WASM Module
//!
//! Core of a songwriting assistant: syllable estimation, live document
//! statistics, song-structure planning, and post-processing of generated
//! lyrics. Network access stays with the host; this crate only builds
//! requests and interprets results.

pub mod api;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod postprocess;
pub mod session;
pub mod settings;
pub mod structure;
pub mod syllables;
pub mod text;
pub mod utils;

// Re-export commonly used types
pub use errors::{GatewayError, LyricError};
pub use models::{
    DocumentStats, GeneratedSong, GenerationRequest, LineFeedback, SongMetadata, StructurePlan,
    StructureRequest, StyleAttributes, WordSuggestion,
};
pub use session::EditorSession;
pub use settings::EngineSettings;
pub use syllables::{count_syllables, ExceptionTable, SyllableEstimator};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }

    log::info!("Lyricist WASM module initialized");
}
