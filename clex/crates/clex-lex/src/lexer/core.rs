//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use tracing::{debug, trace};

use crate::classify::{
    is_digit, is_ident_start, is_letter, is_operator, is_whitespace, punctuation_kind,
};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Scanner for C-like source text.
///
/// The lexer walks the source once, trying its rules in a fixed priority
/// order for every character: whitespace, digits, keywords, identifiers,
/// operators, punctuation. Characters no rule claims are dropped.
///
/// # Example
///
/// ```
/// use clex_lex::{Lexer, LexerConfig, TokenKind};
///
/// let mut lexer = Lexer::new("if(x)", LexerConfig::default());
///
/// let token = lexer.next_token().unwrap().unwrap();
/// assert_eq!(token.kind(), TokenKind::Keyword);
/// assert_eq!(token.text(), "if");
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Scanner options.
    pub(crate) config: LexerConfig,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Set once an error has been returned; the lexer yields nothing after.
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            failed: false,
        }
    }

    /// Returns the next token, `Ok(None)` at end of input.
    ///
    /// After an error has been returned every further call yields
    /// `Ok(None)`.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        if self.failed {
            return Ok(None);
        }

        let result = self.scan_token();
        if result.is_err() {
            self.failed = true;
        }
        result
    }

    /// Scans the whole input into a token sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::{Lexer, LexerConfig, TokenKind};
    ///
    /// let tokens = Lexer::new("foo123;", LexerConfig::default()).tokenize().unwrap();
    /// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
    /// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Semicolon]);
    /// ```
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        debug!(
            tokens = tokens.len(),
            lines = self.cursor.line(),
            "scan finished"
        );
        Ok(tokens)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    fn scan_token(&mut self) -> LexResult<Option<Token>> {
        loop {
            self.start_token();

            let Some(c) = self.cursor.current_char() else {
                return Ok(None);
            };

            // The cursor bumps the line counter when it steps over '\n'
            if is_whitespace(c) {
                self.cursor.advance();
                continue;
            }

            if is_digit(c) {
                if self.config.number_literals {
                    return self.lex_number();
                }
                self.cursor.advance();
                continue;
            }

            if is_letter(c) || c == '#' {
                if let Some(token) = self.lex_keyword() {
                    return Ok(Some(token));
                }
            }

            if is_ident_start(c) {
                return self.lex_identifier();
            }

            if is_operator(c) {
                return Ok(self.lex_operator());
            }

            if let Some(kind) = punctuation_kind(c) {
                return Ok(self.lex_punctuation(kind));
            }

            trace!(
                character = ?c,
                line = self.token_start_line,
                column = self.token_start_column,
                "discarding unclassified character"
            );
            self.cursor.advance();
        }
    }

    /// Marks the cursor position as the start of the next token.
    pub(crate) fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds a token from the current token start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        Token::new(self.cursor.slice_from(self.token_start), kind, span)
    }

    /// Error for a lexeme of `kind` that ran past the length limit.
    pub(crate) fn lexeme_too_long(&self, kind: TokenKind) -> LexError {
        LexError::LexemeTooLong {
            kind,
            line: self.token_start_line,
            column: self.token_start_column,
            limit: self.config.max_lexeme_len,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Scans `source` with the default configuration.
///
/// # Example
///
/// ```
/// let tokens = clex_lex::tokenize("#include").unwrap();
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].text(), "#include");
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source, LexerConfig::default()).tokenize()
}
