//! Operator and punctuation lexing.
//!
//! Every operator is a single character; there is no multi-character
//! operator table.

use crate::classify::{is_operator, punctuation_kind};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the single-character operator under the cursor.
    ///
    /// Handles: `+ - / * | ? ~ & ! > < = , . [ ]`
    ///
    /// Returns `None` without consuming anything for any other character.
    pub fn lex_operator(&mut self) -> Option<Token> {
        if !self.cursor.current_char().is_some_and(is_operator) {
            return None;
        }

        self.start_token();
        self.cursor.advance();
        Some(self.make_token(TokenKind::Operator))
    }

    /// Lexes the structural character under the cursor if it is of `kind`.
    ///
    /// Handles: `( ) { } ;`
    pub fn lex_punctuation(&mut self, kind: TokenKind) -> Option<Token> {
        if self.cursor.current_char().and_then(punctuation_kind) != Some(kind) {
            return None;
        }

        self.start_token();
        self.cursor.advance();
        Some(self.make_token(kind))
    }
}
