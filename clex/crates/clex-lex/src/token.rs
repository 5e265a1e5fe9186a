//! Token type definitions.

use std::fmt;

use crate::span::Span;

/// Reserved words, compared against whole runs only.
///
/// The two preprocessor directives are listed with their `#` so that
/// `#include` and `#define` come out as single keyword tokens.
pub const KEYWORDS: [&str; 16] = [
    "void", "int", "char", "float", "double", "struct", "typedef", "return", "if", "else", "do",
    "while", "goto", "NULL", "#include", "#define",
];

/// Returns true if `text` is exactly one of the [`KEYWORDS`].
///
/// The comparison is case-sensitive and never matches a prefix.
///
/// # Example
///
/// ```
/// use clex_lex::token::is_keyword;
///
/// assert!(is_keyword("int"));
/// assert!(is_keyword("#define"));
/// assert!(!is_keyword("intx"));
/// assert!(!is_keyword("Int"));
/// ```
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

/// The closed set of token categories.
///
/// Each kind has a stable numeric code used by the `<lexeme,code>` output
/// format. Codes are grouped by hundreds: keywords, operators, identifiers,
/// brackets, literals, semicolon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Reserved word such as `int` or `#include`.
    Keyword,
    /// Single-character operator such as `+` or `[`.
    Operator,
    /// Identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    Identifier,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Angle bracket. Reserved; `<` currently scans as an operator.
    LeftAngle,
    /// Angle bracket. Reserved; `>` currently scans as an operator.
    RightAngle,
    /// String literal. Reserved; not produced by the scanner.
    StringLiteral,
    /// Maximal run of decimal digits.
    NumberLiteral,
    /// Character literal. Reserved; not produced by the scanner.
    CharLiteral,
    /// `;`
    Semicolon,
}

impl TokenKind {
    /// All kinds, in code order.
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Keyword,
        TokenKind::Operator,
        TokenKind::Identifier,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftAngle,
        TokenKind::RightAngle,
        TokenKind::StringLiteral,
        TokenKind::NumberLiteral,
        TokenKind::CharLiteral,
        TokenKind::Semicolon,
    ];

    /// Returns the numeric category code of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Keyword.code(), 0);
    /// assert_eq!(TokenKind::RightParen.code(), 303);
    /// assert_eq!(TokenKind::NumberLiteral.code(), 410);
    /// ```
    pub const fn code(self) -> u32 {
        match self {
            TokenKind::Keyword => 0,
            TokenKind::Operator => 100,
            TokenKind::Identifier => 200,
            TokenKind::LeftBrace => 300,
            TokenKind::RightBrace => 301,
            TokenKind::LeftParen => 302,
            TokenKind::RightParen => 303,
            TokenKind::LeftAngle => 304,
            TokenKind::RightAngle => 305,
            TokenKind::StringLiteral => 400,
            TokenKind::NumberLiteral => 410,
            TokenKind::CharLiteral => 420,
            TokenKind::Semicolon => 500,
        }
    }

    /// Looks a kind up by its numeric code.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Returns the lowercase name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
            TokenKind::Identifier => "identifier",
            TokenKind::LeftBrace => "left_brace",
            TokenKind::RightBrace => "right_brace",
            TokenKind::LeftParen => "left_paren",
            TokenKind::RightParen => "right_paren",
            TokenKind::LeftAngle => "left_angle",
            TokenKind::RightAngle => "right_angle",
            TokenKind::StringLiteral => "string_literal",
            TokenKind::NumberLiteral => "number_literal",
            TokenKind::CharLiteral => "char_literal",
            TokenKind::Semicolon => "semicolon",
        }
    }

    /// Returns true for the literal kinds (400-class codes).
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral | TokenKind::NumberLiteral | TokenKind::CharLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// Tokens are immutable once built: the scanner is the only producer and
/// every field is read through an accessor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
    kind: TokenKind,
    code: Option<u32>,
    span: Span,
}

impl Token {
    /// Creates a token with an unset sub-classification code.
    pub fn new(text: impl Into<String>, kind: TokenKind, span: Span) -> Self {
        Self {
            text: text.into(),
            kind,
            code: None,
            span,
        }
    }

    /// The exact lexeme matched.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The token category.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Sub-classification slot (which keyword, which operator).
    ///
    /// Always `None` for now; the JSON output renders it as `-1`.
    pub fn code(&self) -> Option<u32> {
        self.code
    }

    /// Location of the token in the source.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Line of the first character (1-based).
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the first character (1-based).
    pub fn column(&self) -> u32 {
        self.span.column
    }
}

/// Renders the token as a `` <`lexeme`,code> `` pair.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<`{}`,{}>", self.text, self.kind.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table() {
        assert_eq!(KEYWORDS.len(), 16);
        for kw in KEYWORDS {
            assert!(is_keyword(kw));
        }
        assert!(!is_keyword("in"));
        assert!(!is_keyword("null"));
        assert!(!is_keyword("include"));
        assert!(!is_keyword(""));
    }

    #[test]
    fn test_codes_are_unique_and_invertible() {
        for kind in TokenKind::ALL {
            assert_eq!(TokenKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(TokenKind::from_code(1), None);
        assert_eq!(TokenKind::from_code(999), None);
    }

    #[test]
    fn test_code_classes() {
        assert_eq!(TokenKind::Operator.code(), 100);
        assert_eq!(TokenKind::Identifier.code(), 200);
        assert_eq!(TokenKind::LeftBrace.code(), 300);
        assert_eq!(TokenKind::RightAngle.code(), 305);
        assert_eq!(TokenKind::StringLiteral.code(), 400);
        assert_eq!(TokenKind::CharLiteral.code(), 420);
        assert_eq!(TokenKind::Semicolon.code(), 500);
    }

    #[test]
    fn test_literal_kinds() {
        let literals: Vec<_> = TokenKind::ALL.into_iter().filter(|k| k.is_literal()).collect();
        assert_eq!(
            literals,
            [
                TokenKind::StringLiteral,
                TokenKind::NumberLiteral,
                TokenKind::CharLiteral
            ]
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::LeftParen.to_string(), "left_paren");
        assert_eq!(TokenKind::NumberLiteral.to_string(), "number_literal");
    }

    #[test]
    fn test_token_display_pair() {
        let token = Token::new("while", TokenKind::Keyword, Span::new(0, 5, 1, 1));
        assert_eq!(token.to_string(), "<`while`,0>");
        let token = Token::new(";", TokenKind::Semicolon, Span::new(5, 6, 1, 6));
        assert_eq!(token.to_string(), "<`;`,500>");
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::new("x", TokenKind::Identifier, Span::new(8, 9, 3, 2));
        assert_eq!(token.text(), "x");
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.code(), None);
        assert_eq!((token.line(), token.column()), (3, 2));
        assert_eq!(token.span().len(), 1);
    }
}
