//! Scanner configuration.

/// Default maximum lexeme length, in characters.
///
/// Matches a 32-byte lexeme buffer with room for a terminator.
pub const DEFAULT_MAX_LEXEME_LEN: usize = 31;

/// Options controlling how the scanner treats its input.
///
/// # Example
///
/// ```
/// use clex_lex::LexerConfig;
///
/// let config = LexerConfig::default()
///     .with_max_lexeme_len(0)
///     .with_number_literals(false);
/// assert_eq!(config.lexeme_limit(), None);
/// assert!(!config.number_literals);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Longest lexeme accepted, in characters. `0` disables the limit.
    pub max_lexeme_len: usize,

    /// Emit a number literal per digit run. When false, digits are
    /// consumed one at a time without producing tokens.
    pub number_literals: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_lexeme_len: DEFAULT_MAX_LEXEME_LEN,
            number_literals: true,
        }
    }
}

impl LexerConfig {
    /// Sets the maximum lexeme length (`0` for unlimited).
    pub fn with_max_lexeme_len(mut self, max_lexeme_len: usize) -> Self {
        self.max_lexeme_len = max_lexeme_len;
        self
    }

    /// Enables or disables number literal tokens.
    pub fn with_number_literals(mut self, number_literals: bool) -> Self {
        self.number_literals = number_literals;
        self
    }

    /// The effective lexeme limit, `None` when unlimited.
    pub fn lexeme_limit(&self) -> Option<usize> {
        (self.max_lexeme_len > 0).then_some(self.max_lexeme_len)
    }
}
