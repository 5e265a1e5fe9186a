//! Error types for the scanner.

use thiserror::Error;

use crate::token::TokenKind;

/// Error produced while scanning.
///
/// Scanning stops at the first error; no tokens after it are produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A lexeme kept going past the configured length limit.
    #[error("{kind} at {line}:{column} is longer than the limit of {limit} characters")]
    LexemeTooLong {
        /// Kind of token that was being scanned.
        kind: TokenKind,
        /// Line of the lexeme's first character.
        line: u32,
        /// Column of the lexeme's first character.
        column: u32,
        /// The configured maximum lexeme length.
        limit: usize,
    },
}

/// Result type alias for scanner operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
