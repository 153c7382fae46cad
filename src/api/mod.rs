//! Lyricist WASM API
//!
//! JavaScript-facing functions, grouped by concern:
//!
//! - `helpers`: console logging, serialization, the session store
//! - `analysis`: stateless syllable counts, stats and cursor words
//! - `generation`: structure plans, prompts, scaffolds and post-processing
//! - `session`: the stateful editor session and its tickets

pub mod helpers;
pub mod analysis;
pub mod generation;
pub mod session;

pub use analysis::*;
pub use generation::*;
pub use session::*;
