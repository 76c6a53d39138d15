//! Per-character downgrade for a target [`CharacterProfile`].
//!
//! Resolution order, first match wins:
//! 1. the character is native to the profile and passes through;
//! 2. the compatibility table has a curated replacement (`…` -> `...`);
//! 3. its compatibility decomposition, minus combining marks, leaves exactly
//!    one base character that the profile carries (`ŷ` -> `y`);
//! 4. otherwise it becomes [`PLACEHOLDER`].
//!
//! Step 3 uses compatibility (NFKD) rather than canonical-only decomposition,
//! so tagged compatibility forms fold too (`Ａ` -> `A`, `²` -> `2`).

use unicode_normalization::char::{decompose_compatible, is_combining_mark};

use crate::profile::CharacterProfile;
use crate::tables::{compatibility_replacement, PLACEHOLDER};

/// How a single character is carried by a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Downgrade {
    Native(char),
    Compatible(&'static str),
    Decomposed(char),
    Unsupported,
}

impl Downgrade {
    pub fn is_native(&self) -> bool {
        matches!(self, Downgrade::Native(_))
    }

    /// Append the rendered form to `out`.
    pub fn push_to(&self, out: &mut String) {
        match *self {
            Downgrade::Native(ch) | Downgrade::Decomposed(ch) => out.push(ch),
            Downgrade::Compatible(rep) => out.push_str(rep),
            Downgrade::Unsupported => out.push(PLACEHOLDER),
        }
    }
}

pub fn classify(ch: char, profile: CharacterProfile) -> Downgrade {
    if profile.is_native(ch) {
        return Downgrade::Native(ch);
    }
    if let Some(rep) = compatibility_replacement(ch) {
        return Downgrade::Compatible(rep);
    }
    match decomposed_base(ch) {
        Some(base) if profile.is_native(base) => Downgrade::Decomposed(base),
        _ => Downgrade::Unsupported,
    }
}

/// The single non-mark character left after NFKD, if there is exactly one.
fn decomposed_base(ch: char) -> Option<char> {
    let mut base = None;
    let mut bases = 0usize;
    decompose_compatible(ch, |c| {
        if !is_combining_mark(c) {
            bases += 1;
            base = Some(c);
        }
    });
    if bases == 1 {
        base
    } else {
        None
    }
}

pub fn encode_char(ch: char, profile: CharacterProfile) -> String {
    let mut out = String::new();
    classify(ch, profile).push_to(&mut out);
    out
}

/// Downgrade every character of `content` for `profile`.
///
/// Total: never fails, and every output character is native to the profile.
pub fn encode(content: &str, profile: CharacterProfile) -> String {
    let mut out = String::with_capacity(content.len());
    let mut replaced = 0usize;
    for ch in content.chars() {
        let downgrade = classify(ch, profile);
        if downgrade == Downgrade::Unsupported {
            replaced += 1;
        }
        downgrade.push_to(&mut out);
    }
    if replaced > 0 {
        tracing::debug!(%profile, replaced, "substituted placeholder for unsupported characters");
    }
    out
}
