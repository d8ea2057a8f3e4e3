//! Parse errors for search-index fragments.
//!
//! A fragment is rejected as a whole on the first structural problem; there
//! is no partial-result recovery for a static index.

use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// A structural error in a search-index fragment, positioned by line and
/// column (both 1-based).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{line}:{col}: expected {expected}, found {found}")]
    Unexpected {
        line: u32,
        col: u32,
        expected: &'static str,
        found: String,
    },

    #[error("{line}:{col}: unexpected end of input while parsing {context}")]
    UnexpectedEof {
        line: u32,
        col: u32,
        context: &'static str,
    },

    /// A record or target is missing a required field — an empty record
    /// array, a payload without a name, an entry with no targets.
    #[error("{line}:{col}: record is missing its {what}")]
    MissingField {
        line: u32,
        col: u32,
        what: &'static str,
    },

    #[error("{line}:{col}: unsupported escape sequence \\{escape}")]
    BadEscape { line: u32, col: u32, escape: char },

    #[error("{line}:{col}: invalid unicode escape")]
    BadUnicodeEscape { line: u32, col: u32 },
}

impl ParseError {
    /// Position of the error as `(line, col)`.
    pub fn position(&self) -> (u32, u32) {
        match *self {
            ParseError::Unexpected { line, col, .. }
            | ParseError::UnexpectedEof { line, col, .. }
            | ParseError::MissingField { line, col, .. }
            | ParseError::BadEscape { line, col, .. }
            | ParseError::BadUnicodeEscape { line, col } => (line, col),
        }
    }
}
