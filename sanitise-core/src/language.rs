use std::collections::BTreeSet;

use crate::scripts::{ScriptFamily, SCRIPT_RANGES};

/// The curated family `ch` belongs to, if any.
pub fn script_family(ch: char) -> Option<ScriptFamily> {
    SCRIPT_RANGES
        .iter()
        .find(|range| range.contains(ch))
        .map(|range| range.family)
}

/// True when `content` contains text from a script family that should be sent
/// with an extended encoding rather than downgraded.
///
/// Non-Latin scripts outside the curated list (Phoenician, say) answer false.
pub fn is_extended_language(content: &str) -> bool {
    content.chars().any(|ch| script_family(ch).is_some())
}

/// Every curated family that appears in `content`.
pub fn detect_script_families(content: &str) -> BTreeSet<ScriptFamily> {
    content.chars().filter_map(script_family).collect()
}
