//! Lyric scaffold: an offline skeleton document that follows the plan
//!
//! Produces section labels and numbered placeholder lines so a writer can
//! start filling in a structure without calling the generation gateway.

use crate::models::generation::non_blank;
use crate::models::{GenerationRequest, SectionTag};
use crate::settings::LINES_PER_BAR;

use super::planner::plan_structure;

pub const DEFAULT_SCAFFOLD_TITLE: &str = "Untitled Song";
pub const DEFAULT_SCAFFOLD_AUDIO_TAG: &str = "Contemporary Pop";

/// At most this many placeholder lines per verse
const MAX_VERSE_LINES: u32 = 4;
const HOOK_LINES: usize = 3;
const FINAL_HOOK_LINES: usize = 6;
const BRIDGE_LINES: usize = 6;

/// Build the skeleton text for a request
pub fn build_lyric_scaffold(request: &GenerationRequest) -> String {
    let structure = request.structure;
    let plan = plan_structure(structure.verse_count, structure.chorus_count);
    let verse_lines = (structure.bars_per_verse / LINES_PER_BAR as u32).min(MAX_VERSE_LINES) as usize;

    let mut out = String::new();
    out.push_str(&format!(
        "[{}]\n",
        non_blank(&request.song_title).unwrap_or(DEFAULT_SCAFFOLD_TITLE)
    ));
    out.push_str(&format!(
        "[Audio Tag: {}]\n\n",
        non_blank(&request.audio_tag).unwrap_or(DEFAULT_SCAFFOLD_AUDIO_TAG)
    ));

    let mut after_bridge = false;
    for section in plan.iter() {
        out.push_str(&section.marker());
        out.push('\n');
        match section {
            SectionTag::Verse(n) => {
                push_placeholders(&mut out, &format!("verse {}", n), verse_lines);
                out.push_str("[Instrumental]\n\n");
            }
            SectionTag::Hook if after_bridge => {
                push_placeholders(&mut out, "final hook", FINAL_HOOK_LINES);
                out.push_str("[Harmonizing]\n");
            }
            SectionTag::Hook => {
                push_placeholders(&mut out, "hook", HOOK_LINES);
                out.push_str("[Harmonizing]\n\n");
            }
            SectionTag::Bridge => {
                push_placeholders(&mut out, "bridge", BRIDGE_LINES);
                out.push_str("[Drop]\n[Instrumental]\n\n");
                after_bridge = true;
            }
        }
    }

    out
}

fn push_placeholders(out: &mut String, section: &str, count: usize) {
    for line in 1..=count {
        out.push_str(&format!("({} line {})\n", section, line));
    }
}
