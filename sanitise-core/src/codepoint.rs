//! Strict parser for four-digit codepoint literals (`"0041"` -> `'A'`).
//!
//! Only the exact `XXXX` form is accepted. Anything else, including longer
//! hex strings and strings that merely start with hex digits, is rejected so
//! that table data cannot smuggle arbitrary text through this path.

use crate::error::{Result, SanitiseError};

const LITERAL_LEN: usize = 4;

/// Resolve a four-hex-digit literal into the character it names.
pub fn resolve(literal: &str) -> Result<char> {
    let invalid = |reason| SanitiseError::InvalidCodepoint {
        literal: literal.to_string(),
        reason,
    };

    if literal.is_empty() {
        return Err(invalid("empty literal"));
    }
    // Check bytes, not chars: a multi-byte char must not pass as a single digit.
    if literal.len() != LITERAL_LEN {
        return Err(invalid("expected exactly four hex digits"));
    }
    if !literal.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid("contains non-hex characters"));
    }

    let value = u32::from_str_radix(literal, 16).map_err(|_| invalid("not a hex number"))?;
    char::from_u32(value).ok_or_else(|| invalid("surrogate code points are not scalar values"))
}
