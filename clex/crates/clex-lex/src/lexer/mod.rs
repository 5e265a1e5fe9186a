//! Lexer module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - Main Lexer struct and the per-character dispatch loop
//! - `keyword` - Keyword recognition with non-committing lookahead
//! - `identifier` - Identifier recognition
//! - `number` - Number literal recognition
//! - `operator` - Operator and punctuation tokens

mod core;
mod identifier;
mod keyword;
mod number;
mod operator;

pub use self::core::{tokenize, Lexer};
