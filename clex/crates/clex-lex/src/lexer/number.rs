//! Number literal lexing.

use crate::classify::is_digit;
use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of decimal digits as one number literal.
    ///
    /// Only plain decimal digits are recognized: `12ab` scans as the number
    /// `12` followed by the identifier `ab`, and `3.5` as `3`, `.`, `5`.
    /// Returns `Ok(None)` without consuming anything when the cursor is not
    /// on a digit.
    ///
    /// # Errors
    ///
    /// [`LexError::LexemeTooLong`](crate::LexError::LexemeTooLong) if the
    /// digit run continues past the configured limit.
    pub fn lex_number(&mut self) -> LexResult<Option<Token>> {
        if !self.cursor.current_char().is_some_and(is_digit) {
            return Ok(None);
        }

        self.start_token();
        let limit = self.config.lexeme_limit();
        let run = self.cursor.measure_run(limit, |_, c| is_digit(c));

        if run.boundary.is_some_and(is_digit) {
            return Err(self.lexeme_too_long(TokenKind::NumberLiteral));
        }

        self.cursor.advance_bytes(run.bytes);
        Ok(Some(self.make_token(TokenKind::NumberLiteral)))
    }
}
