//! Character classification for the scanner.
//!
//! Every predicate here is pure and ASCII-only. Characters outside ASCII are
//! never letters, digits or whitespace, so they fall through to the scanner's
//! discard rule.

use crate::token::TokenKind;

/// Checks if a character is an ASCII letter (`a`-`z`, `A`-`Z`).
///
/// # Example
///
/// ```
/// use clex_lex::classify::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('Z'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('α'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character is an ASCII decimal digit.
///
/// # Example
///
/// ```
/// use clex_lex::classify::is_digit;
///
/// assert!(is_digit('0'));
/// assert!(is_digit('9'));
/// assert!(!is_digit('a'));
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is scanner whitespace: tab, newline or space.
///
/// Carriage returns and form feeds are not whitespace here; the scanner
/// drops them as unclassifiable characters, which has the same effect on
/// the token stream.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | ' ')
}

/// Checks if a character may start an identifier (letter or `_`).
#[inline]
pub fn is_ident_start(c: char) -> bool {
    is_letter(c) || c == '_'
}

/// Checks if a character may continue an identifier (letter, digit or `_`).
///
/// # Example
///
/// ```
/// use clex_lex::classify::is_ident_continue;
///
/// assert!(is_ident_continue('x'));
/// assert!(is_ident_continue('7'));
/// assert!(is_ident_continue('_'));
/// assert!(!is_ident_continue('#'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_'
}

/// Checks if a character is one of the single-character operator glyphs.
///
/// Operators are never combined: `==` scans as two `=` operators.
#[inline]
pub fn is_operator(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '/' | '*' | '|' | '?' | '~' | '&' | '!' | '>' | '<' | '=' | ',' | '.' | '['
            | ']'
    )
}

/// Returns the structural token kind for a punctuation character.
///
/// # Example
///
/// ```
/// use clex_lex::classify::punctuation_kind;
/// use clex_lex::TokenKind;
///
/// assert_eq!(punctuation_kind('{'), Some(TokenKind::LeftBrace));
/// assert_eq!(punctuation_kind(';'), Some(TokenKind::Semicolon));
/// assert_eq!(punctuation_kind('['), None);
/// ```
pub fn punctuation_kind(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::LeftParen),
        ')' => Some(TokenKind::RightParen),
        '{' => Some(TokenKind::LeftBrace),
        '}' => Some(TokenKind::RightBrace),
        ';' => Some(TokenKind::Semicolon),
        _ => None,
    }
}
