//! Song structure planner
//!
//! Single source of truth for the section sequence. The structure preview and
//! the generation prompt both read the plan produced here.

use crate::models::{SectionTag, StructurePlan};

/// Plan the section sequence for the given counts
///
/// Every verse `i` is followed by a hook while `i <= chorus_count - 1`. Any
/// non-zero chorus count then closes with a bridge and one final hook, so a
/// chorus count of 1 yields `Bridge, Hook` after the verses.
pub fn plan_structure(verse_count: u32, chorus_count: u32) -> StructurePlan {
    let mut sections = Vec::new();

    for i in 1..=verse_count {
        sections.push(SectionTag::Verse(i));
        // chorus_count - 1 without underflow: i >= 1, so i < chorus_count
        if i < chorus_count {
            sections.push(SectionTag::Hook);
        }
    }

    if chorus_count > 0 {
        sections.push(SectionTag::Bridge);
        sections.push(SectionTag::Hook);
    }

    log::debug!(
        "planned {} sections for {} verses / {} choruses",
        sections.len(),
        verse_count,
        chorus_count
    );

    StructurePlan { sections }
}

/// Human summary of the chorus setting for the structure preview
pub fn describe_chorus_count(chorus_count: u32) -> String {
    match chorus_count {
        0 => "No hooks".to_string(),
        1 => "Bridge only".to_string(),
        n => {
            let hooks = n - 1;
            format!("{} Hook{} + Bridge", hooks, if hooks > 1 { "s" } else { "" })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SectionTag::*;

    #[test]
    fn test_two_verses_three_choruses() {
        let plan = plan_structure(2, 3);
        assert_eq!(plan.sections, vec![Verse(1), Hook, Verse(2), Hook, Bridge, Hook]);
        assert_eq!(
            plan.labels(),
            vec!["Verse 1", "Hook", "Verse 2", "Hook", "Bridge", "Hook"]
        );
    }

    #[test]
    fn test_empty_plan() {
        assert!(plan_structure(0, 0).is_empty());
    }

    #[test]
    fn test_single_chorus_is_bridge_and_final_hook() {
        assert_eq!(plan_structure(1, 1).sections, vec![Verse(1), Bridge, Hook]);
    }

    #[test]
    fn test_no_choruses_means_no_hooks_or_bridge() {
        assert_eq!(plan_structure(3, 0).sections, vec![Verse(1), Verse(2), Verse(3)]);
    }

    #[test]
    fn test_no_verses_still_gets_bridge_pair() {
        assert_eq!(plan_structure(0, 4).sections, vec![Bridge, Hook]);
    }

    #[test]
    fn test_large_counts_are_accepted() {
        let plan = plan_structure(12, 40);
        // every verse gets a hook, plus bridge + final hook
        assert_eq!(plan.len(), 12 * 2 + 2);
    }

    #[test]
    fn test_chip_labels() {
        assert_eq!(plan_structure(2, 2).chip_labels(), vec!["V1", "Hook", "V2", "Bridge", "Hook"]);
    }

    #[test]
    fn test_describe_chorus_count() {
        assert_eq!(describe_chorus_count(0), "No hooks");
        assert_eq!(describe_chorus_count(1), "Bridge only");
        assert_eq!(describe_chorus_count(2), "1 Hook + Bridge");
        assert_eq!(describe_chorus_count(4), "3 Hooks + Bridge");
    }
}
