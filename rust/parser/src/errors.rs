use thiserror::Error;

/// Errors raised while parsing one hand-history blob.
///
/// Every variant is fatal for the hand being parsed: no partial
/// aggregate survives a failure. Callers batch-parsing many hands are
/// expected to catch per-hand errors and continue.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid card token {token:?}")]
    InvalidToken { token: String },
    #[error("invalid amount token {token:?}")]
    InvalidAmount { token: String },
    #[error("invalid combo: {0}")]
    InvalidCombo(String),
    #[error("{section} section: {detail}")]
    Structural {
        section: &'static str,
        detail: String,
    },
    #[error("board mismatch: {0}")]
    Consistency(String),
    #[error("unrecognized action line {0:?}")]
    UnrecognizedLine(String),
}

impl ParseError {
    pub(crate) fn structural(section: &'static str, detail: impl Into<String>) -> ParseError {
        ParseError::Structural {
            section,
            detail: detail.into(),
        }
    }
}
