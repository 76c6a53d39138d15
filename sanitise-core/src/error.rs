use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanitiseError {
    /// A codepoint literal was not exactly four hex digits naming a BMP scalar value.
    #[error("invalid codepoint literal {literal:?}: {reason}")]
    InvalidCodepoint { literal: String, reason: &'static str },

    #[error("unknown character profile {0:?} (expected \"gsm\" or \"ascii\")")]
    UnknownProfile(String),
}

pub type Result<T> = std::result::Result<T, SanitiseError>;
