//! Diagnostics over a message body. Neither function alters its input, and
//! neither depends on the other.

use std::collections::BTreeSet;

use crate::encoder::{classify, Downgrade};
use crate::language::script_family;
use crate::profile::CharacterProfile;

/// Distinct characters of `content` that `profile` does not carry as-is.
///
/// Includes characters with a curated substitute or a decomposed fallback as
/// well as those that would become the placeholder.
pub fn get_non_compatible_characters(content: &str, profile: CharacterProfile) -> BTreeSet<char> {
    content
        .chars()
        .filter(|&ch| !classify(ch, profile).is_native())
        .collect()
}

/// Distinct characters of `content` that would be replaced by the placeholder
/// and are not covered by a supported extended-language script.
///
/// These are lost no matter which transport the caller picks, which makes this
/// the set worth warning a message author about.
pub fn get_lossy_characters(content: &str, profile: CharacterProfile) -> BTreeSet<char> {
    content
        .chars()
        .filter(|&ch| classify(ch, profile) == Downgrade::Unsupported)
        .filter(|&ch| script_family(ch).is_none())
        .collect()
}
