//! Process-wide character tables: the native sets of each profile and the
//! curated compatibility substitutions. Built once on first use, read-only after.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::codepoint;

/// Substituted for any character a profile cannot carry.
pub const PLACEHOLDER: char = '?';

/// GSM 03.38 default alphabet, minus the ESC code that introduces the extension table.
const GSM_BASIC: &str = concat!(
    "@£$¥èéùìòÇ\nØø\rÅåΔ_ΦΓΛΩΠΨΣΘΞÆæßÉ !\"#¤%&'()*+,-./0123456789:;<=>?",
    "¡ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÑÜ§¿abcdefghijklmnopqrstuvwxyzäöñüà",
);

/// Characters reachable through the GSM extension table (two septets each).
const GSM_EXTENSION: &str = "^{}\\[~]|€";

/// Welsh letters missing from GSM 03.38 that SMS delivery still passes through.
const WELSH_NON_GSM: &str = "ÂâÊêÎîÔôÛûŴŵŶŷËëÏïẄẅŸÿÁáÍíÓóÚúẂẃÝýÀÌìÒòÙùẀẁỲỳ";

/// Codepoint literal -> replacement text. Keys go through [`codepoint::resolve`].
const COMPATIBILITY_LITERALS: &[(&str, &str)] = &[
    ("2013", "-"),   // en dash
    ("2014", "-"),   // em dash
    ("2026", "..."), // horizontal ellipsis
    ("2018", "'"),   // left single quotation mark
    ("2019", "'"),   // right single quotation mark
    ("201C", "\""),  // left double quotation mark
    ("201D", "\""),  // right double quotation mark
    ("180E", ""),    // mongolian vowel separator
    ("200B", ""),    // zero width space
    ("200C", ""),    // zero width non-joiner
    ("200D", ""),    // zero width joiner
    ("2060", ""),    // word joiner
    ("FEFF", ""),    // zero width no-break space
    ("00A0", " "),   // no-break space
    ("0009", " "),   // tab
];

pub(crate) static GSM_NATIVE: Lazy<HashSet<char>> = Lazy::new(|| {
    GSM_BASIC
        .chars()
        .chain(GSM_EXTENSION.chars())
        .chain(WELSH_NON_GSM.chars())
        .collect()
});

pub(crate) static ASCII_NATIVE: Lazy<HashSet<char>> = Lazy::new(|| (' '..='~').collect());

static COMPATIBILITY: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    COMPATIBILITY_LITERALS
        .iter()
        .filter_map(|&(literal, replacement)| match codepoint::resolve(literal) {
            Ok(ch) => Some((ch, replacement)),
            Err(err) => {
                tracing::error!(%err, "dropping compatibility entry");
                None
            }
        })
        .collect()
});

/// Curated replacement for `ch`, if one exists.
pub fn compatibility_replacement(ch: char) -> Option<&'static str> {
    COMPATIBILITY.get(&ch).copied()
}

/// Every compatibility entry, in no particular order.
pub fn compatibility_entries() -> impl Iterator<Item = (char, &'static str)> {
    COMPATIBILITY.iter().map(|(&ch, &rep)| (ch, rep))
}
