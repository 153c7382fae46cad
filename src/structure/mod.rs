//! Song structure
//!
//! Turns user-controlled counts into a section plan, and everything derived
//! from that plan: the generation prompts and the offline lyric scaffold.
//!
//! ## Modules
//!
//! - `planner`: verse/hook/bridge sequence
//! - `prompt`: mustache-rendered system and user prompts
//! - `scaffold`: skeleton lyric document following the plan

pub mod planner;
pub mod prompt;
pub mod scaffold;

pub use planner::{describe_chorus_count, plan_structure};
pub use prompt::{build_generation_prompt, GenerationPrompt, SECTION_LABEL_VOCABULARY};
pub use scaffold::build_lyric_scaffold;
