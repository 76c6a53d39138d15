//! Curated script families whose text should travel over an extended (UCS-2)
//! encoding instead of being downgraded character by character.
//!
//! This is data only. Extending support for a script means adding ranges here;
//! the classifier in [`crate::language`] does not change.

use serde::Serialize;
use std::fmt;

use self::ScriptFamily::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptFamily {
    Hangul,
    Greek,
    Cyrillic,
    Thai,
    Tamil,
    /// Hiragana and katakana. Kanji fall under [`ScriptFamily::Cjk`].
    Japanese,
    /// CJK unified and compatibility ideographs.
    Cjk,
    /// Latin letters that only Vietnamese uses.
    Vietnamese,
    /// Latin letters that only Turkish uses.
    Turkish,
}

impl ScriptFamily {
    pub fn name(self) -> &'static str {
        match self {
            ScriptFamily::Hangul => "Hangul",
            ScriptFamily::Greek => "Greek",
            ScriptFamily::Cyrillic => "Cyrillic",
            ScriptFamily::Thai => "Thai",
            ScriptFamily::Tamil => "Tamil",
            ScriptFamily::Japanese => "Japanese",
            ScriptFamily::Cjk => "CJK",
            ScriptFamily::Vietnamese => "Vietnamese",
            ScriptFamily::Turkish => "Turkish",
        }
    }
}

impl fmt::Display for ScriptFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive range of scalar values belonging to one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRange {
    pub family: ScriptFamily,
    pub start: char,
    pub end: char,
}

impl ScriptRange {
    const fn new(family: ScriptFamily, start: char, end: char) -> Self {
        Self { family, start, end }
    }

    const fn single(family: ScriptFamily, ch: char) -> Self {
        Self::new(family, ch, ch)
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.start <= ch && ch <= self.end
    }
}

pub const SCRIPT_RANGES: &[ScriptRange] = &[
    // Hangul: jamo, compatibility jamo, extended jamo, syllables
    ScriptRange::new(Hangul, '\u{1100}', '\u{11FF}'),
    ScriptRange::new(Hangul, '\u{3130}', '\u{318F}'),
    ScriptRange::new(Hangul, '\u{A960}', '\u{A97F}'),
    ScriptRange::new(Hangul, '\u{AC00}', '\u{D7AF}'),
    ScriptRange::new(Hangul, '\u{D7B0}', '\u{D7FF}'),
    // Greek and Coptic, Greek extended
    ScriptRange::new(Greek, '\u{0370}', '\u{03FF}'),
    ScriptRange::new(Greek, '\u{1F00}', '\u{1FFF}'),
    // Cyrillic, supplement, extended A/B/C
    ScriptRange::new(Cyrillic, '\u{0400}', '\u{052F}'),
    ScriptRange::new(Cyrillic, '\u{1C80}', '\u{1C8F}'),
    ScriptRange::new(Cyrillic, '\u{2DE0}', '\u{2DFF}'),
    ScriptRange::new(Cyrillic, '\u{A640}', '\u{A69F}'),
    ScriptRange::new(Thai, '\u{0E00}', '\u{0E7F}'),
    ScriptRange::new(Tamil, '\u{0B80}', '\u{0BFF}'),
    // Hiragana, katakana, katakana phonetic extensions, halfwidth katakana
    ScriptRange::new(Japanese, '\u{3040}', '\u{309F}'),
    ScriptRange::new(Japanese, '\u{30A0}', '\u{30FF}'),
    ScriptRange::new(Japanese, '\u{31F0}', '\u{31FF}'),
    ScriptRange::new(Japanese, '\u{FF66}', '\u{FF9F}'),
    // Unified ideographs, extension A, compatibility ideographs, extension B
    ScriptRange::new(Cjk, '\u{3400}', '\u{4DBF}'),
    ScriptRange::new(Cjk, '\u{4E00}', '\u{9FFF}'),
    ScriptRange::new(Cjk, '\u{F900}', '\u{FAFF}'),
    ScriptRange::new(Cjk, '\u{20000}', '\u{2A6DF}'),
    // Ă ă Đ đ Ĩ ĩ Ũ ũ Ơ ơ Ư ư
    ScriptRange::new(Vietnamese, '\u{0102}', '\u{0103}'),
    ScriptRange::new(Vietnamese, '\u{0110}', '\u{0111}'),
    ScriptRange::new(Vietnamese, '\u{0128}', '\u{0129}'),
    ScriptRange::new(Vietnamese, '\u{0168}', '\u{0169}'),
    ScriptRange::new(Vietnamese, '\u{01A0}', '\u{01A1}'),
    ScriptRange::new(Vietnamese, '\u{01AF}', '\u{01B0}'),
    // Latin extended additional Ạ..ỹ, skipping Ỳ ỳ which Welsh also uses
    ScriptRange::new(Vietnamese, '\u{1EA0}', '\u{1EF1}'),
    ScriptRange::new(Vietnamese, '\u{1EF4}', '\u{1EF9}'),
    // ç Ğ ğ İ ı Ş ş
    ScriptRange::single(Turkish, '\u{00E7}'),
    ScriptRange::new(Turkish, '\u{011E}', '\u{011F}'),
    ScriptRange::new(Turkish, '\u{0130}', '\u{0131}'),
    ScriptRange::new(Turkish, '\u{015E}', '\u{015F}'),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_well_formed_and_disjoint() {
        for (i, a) in SCRIPT_RANGES.iter().enumerate() {
            assert!(a.start <= a.end, "{a:?} is inverted");
            for b in &SCRIPT_RANGES[i + 1..] {
                let overlaps = a.start <= b.end && b.start <= a.end;
                assert!(!overlaps, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn every_family_has_ranges() {
        let all = [
            Hangul, Greek, Cyrillic, Thai, Tamil, Japanese, Cjk, Vietnamese, Turkish,
        ];
        for family in all {
            assert!(
                SCRIPT_RANGES.iter().any(|r| r.family == family),
                "{family} has no ranges"
            );
        }
    }
}
