//! Keyword recognition.
//!
//! Keywords are matched by measuring the whole candidate run first and only
//! then comparing it against the keyword table. The cursor is not moved
//! unless the run is a keyword, so a miss leaves the same characters for
//! identifier recognition.

use tracing::trace;

use crate::classify::{is_ident_continue, is_letter};
use crate::token::{is_keyword, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Attempts to lex a keyword at the cursor.
    ///
    /// The candidate run is made of letters, plus a `#` in first position
    /// for the preprocessor directives. The attempt fails without consuming
    /// anything when the run is empty, when it is followed by a letter,
    /// digit or underscore (it is part of a longer identifier, or was cut
    /// off by the length limit), or when it is not exactly a keyword.
    ///
    /// # Returns
    ///
    /// `Some(Token)` of kind [`TokenKind::Keyword`], or `None` on a miss.
    pub fn lex_keyword(&mut self) -> Option<Token> {
        self.start_token();
        let limit = self.config.lexeme_limit();
        let run = self
            .cursor
            .measure_run(limit, |index, c| is_letter(c) || (index == 0 && c == '#'));

        if run.is_empty() || run.boundary.is_some_and(is_ident_continue) {
            return None;
        }

        let text = &self.cursor.remaining()[..run.bytes];
        if !is_keyword(text) {
            trace!(candidate = text, "not a keyword");
            return None;
        }

        self.cursor.advance_bytes(run.bytes);
        Some(self.make_token(TokenKind::Keyword))
    }
}
