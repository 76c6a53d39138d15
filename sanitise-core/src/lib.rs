//! Sanitises Unicode text for channels that only carry GSM 03.38 (SMS) or
//! printable ASCII.
//!
//! ```
//! use sanitise_core::{encode, is_extended_language, CharacterProfile};
//!
//! assert_eq!(encode("Wait… “what”?", CharacterProfile::Gsm), "Wait... \"what\"?");
//! assert_eq!(encode("façade", CharacterProfile::Ascii), "facade");
//! assert!(is_extended_language("이것은 테스트입니다"));
//! ```

pub mod codepoint;
pub mod encoder;
pub mod error;
pub mod language;
pub mod profile;
pub mod scanner;
pub mod scripts;
pub mod tables;

pub use codepoint::resolve;
pub use encoder::{classify, encode, encode_char, Downgrade};
pub use error::{Result, SanitiseError};
pub use language::{detect_script_families, is_extended_language, script_family};
pub use profile::CharacterProfile;
pub use scanner::{get_lossy_characters, get_non_compatible_characters};
pub use scripts::{ScriptFamily, ScriptRange, SCRIPT_RANGES};
pub use tables::PLACEHOLDER;
