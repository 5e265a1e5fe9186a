//! Identifier lexing.
//!
//! Identifier recognition is the fallback for any word that is not a
//! keyword, so it never misses on a non-empty run.

use crate::classify::{is_ident_continue, is_ident_start};
use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier.
    ///
    /// Consumes letters, digits and underscores up to the configured
    /// lexeme limit. Returns `Ok(None)` without consuming anything when the
    /// cursor is not on a letter or underscore.
    ///
    /// # Errors
    ///
    /// [`LexError::LexemeTooLong`](crate::LexError::LexemeTooLong) if the
    /// identifier continues past the limit.
    pub fn lex_identifier(&mut self) -> LexResult<Option<Token>> {
        if !self.cursor.current_char().is_some_and(is_ident_start) {
            return Ok(None);
        }

        self.start_token();
        let limit = self.config.lexeme_limit();
        let run = self.cursor.measure_run(limit, |_, c| is_ident_continue(c));

        // Only the length limit can stop the run on an identifier character
        if run.boundary.is_some_and(is_ident_continue) {
            return Err(self.lexeme_too_long(TokenKind::Identifier));
        }

        self.cursor.advance_bytes(run.bytes);
        Ok(Some(self.make_token(TokenKind::Identifier)))
    }
}
