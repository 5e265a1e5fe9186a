//! clex-lex - Scanner for C-like Source Text
//!
//! This crate turns raw source text into an ordered sequence of classified
//! tokens: keywords, identifiers, single-character operators, structural
//! punctuation and decimal number literals.
//!
//! # Example Usage
//!
//! ```
//! use clex_lex::{Lexer, LexerConfig, TokenKind};
//!
//! let source = "int main(void) { return 0; }";
//! let tokens = Lexer::new(source, LexerConfig::default()).tokenize().unwrap();
//!
//! assert_eq!(tokens[0].kind(), TokenKind::Keyword);
//! assert_eq!(tokens[1].text(), "main");
//!
//! // Or pull tokens one at a time
//! let mut lexer = Lexer::new(source, LexerConfig::default());
//! for token in &mut lexer {
//!     println!("{}", token.unwrap());
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`classify`] - Character classification predicates
//! - [`cursor`] - Character cursor with non-committing lookahead
//! - [`token`] - Token, token kinds and the keyword table
//! - [`lexer`] - The scanner and its recognizers
//! - [`config`] - Scanner options
//! - [`error`] - Scanner errors
//!
//! # Scanning Rules
//!
//! Each character is offered to the rules below in order; the first rule
//! that claims it wins.
//!
//! 1. Tab, newline and space are skipped.
//! 2. A digit starts a number literal (or is skipped in legacy mode).
//! 3. A letter or `#` starts a keyword attempt. The whole run is compared
//!    against the keyword table; a miss consumes nothing.
//! 4. A letter or `_` starts an identifier.
//! 5. `+ - / * | ? ~ & ! > < = , . [ ]` are one-character operators.
//! 6. `( ) { } ;` are structural tokens.
//! 7. Anything else is dropped silently.
//!
//! ## Keywords
//!
//! `void`, `int`, `char`, `float`, `double`, `struct`, `typedef`, `return`,
//! `if`, `else`, `do`, `while`, `goto`, `NULL`, `#include`, `#define`
//!
//! ## Length limit
//!
//! Lexemes are capped at [`LexerConfig::max_lexeme_len`] characters
//! (31 by default). An identifier or number that runs past the cap is a
//! [`LexError::LexemeTooLong`] and ends the scan.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod span;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{LexerConfig, DEFAULT_MAX_LEXEME_LEN};
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::{tokenize, Lexer};
pub use span::Span;
pub use token::{is_keyword, Token, TokenKind, KEYWORDS};
