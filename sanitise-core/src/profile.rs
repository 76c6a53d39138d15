use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::SanitiseError;
use crate::tables::{ASCII_NATIVE, GSM_NATIVE};

/// Target character set. Both profiles share one downgrade algorithm and
/// differ only in what they carry natively.
///
/// Deserialisation goes through [`FromStr`], so config files accept the same
/// names as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CharacterProfile {
    /// GSM 03.38 with its extension table, plus Welsh letters.
    Gsm,
    /// Printable 7-bit ASCII.
    Ascii,
}

impl CharacterProfile {
    pub const ALL: [CharacterProfile; 2] = [CharacterProfile::Gsm, CharacterProfile::Ascii];

    pub fn native_set(self) -> &'static HashSet<char> {
        match self {
            CharacterProfile::Gsm => &*GSM_NATIVE,
            CharacterProfile::Ascii => &*ASCII_NATIVE,
        }
    }

    #[inline]
    pub fn is_native(self, ch: char) -> bool {
        self.native_set().contains(&ch)
    }

    /// GSM carries `\n` and `\r`; ASCII replaces them.
    pub fn supports_control_chars(self) -> bool {
        matches!(self, CharacterProfile::Gsm)
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterProfile::Gsm => "GSM",
            CharacterProfile::Ascii => "ASCII",
        }
    }
}

impl fmt::Display for CharacterProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterProfile {
    type Err = SanitiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("gsm") || v.eq_ignore_ascii_case("sms") => {
                Ok(CharacterProfile::Gsm)
            }
            v if v.eq_ignore_ascii_case("ascii") => Ok(CharacterProfile::Ascii),
            other => Err(SanitiseError::UnknownProfile(other.to_string())),
        }
    }
}

impl TryFrom<String> for CharacterProfile {
    type Error = SanitiseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
