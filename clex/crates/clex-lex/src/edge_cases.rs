//! Edge case tests for clex-lex

use crate::{tokenize, LexError, Lexer, LexerConfig, TokenKind, KEYWORDS};
use proptest::prelude::*;

fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .expect("scan failed")
        .into_iter()
        .map(|t| (t.kind(), t.text().to_string()))
        .collect()
}

fn kw(text: &str) -> (TokenKind, String) {
    (TokenKind::Keyword, text.to_string())
}

fn ident(text: &str) -> (TokenKind, String) {
    (TokenKind::Identifier, text.to_string())
}

fn op(text: &str) -> (TokenKind, String) {
    (TokenKind::Operator, text.to_string())
}

fn num(text: &str) -> (TokenKind, String) {
    (TokenKind::NumberLiteral, text.to_string())
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_single_char_ident() {
    assert_eq!(lex_all("x"), [ident("x")]);
}

#[test]
fn test_edge_underscore_alone() {
    assert_eq!(lex_all("_"), [ident("_")]);
}

#[test]
fn test_edge_bare_include() {
    assert_eq!(lex_all("#include"), [kw("#include")]);
}

#[test]
fn test_edge_include_with_header() {
    assert_eq!(
        lex_all("#include <stdio.h>\n"),
        [
            kw("#include"),
            op("<"),
            ident("stdio"),
            op("."),
            ident("h"),
            op(">"),
        ]
    );
}

#[test]
fn test_edge_unknown_directive_drops_hash() {
    assert_eq!(lex_all("#pragma once"), [ident("pragma"), ident("once")]);
}

#[test]
fn test_edge_lone_hash() {
    assert!(lex_all("# ## #").is_empty());
}

#[test]
fn test_edge_keyword_with_digit_suffix() {
    assert_eq!(lex_all("int3"), [ident("int3")]);
}

#[test]
fn test_edge_keyword_with_underscore_suffix() {
    assert_eq!(lex_all("int_x"), [ident("int_x")]);
}

#[test]
fn test_edge_underscore_prefix_keyword() {
    assert_eq!(lex_all("_int"), [ident("_int")]);
}

#[test]
fn test_edge_adjacent_keywords() {
    assert_eq!(
        lex_all("int(char)"),
        [
            kw("int"),
            (TokenKind::LeftParen, "(".into()),
            kw("char"),
            (TokenKind::RightParen, ")".into()),
        ]
    );
}

#[test]
fn test_edge_number_then_identifier() {
    assert_eq!(lex_all("12ab"), [num("12"), ident("ab")]);
}

#[test]
fn test_edge_float_splits() {
    assert_eq!(lex_all("3.25"), [num("3"), op("."), num("25")]);
}

#[test]
fn test_edge_legacy_digits_vanish() {
    let config = LexerConfig::default().with_number_literals(false);
    let tokens = Lexer::new("x1 = 123 + y;", config).tokenize().unwrap();
    let texts: Vec<_> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(texts, ["x1", "=", "+", "y", ";"]);
}

#[test]
fn test_edge_carriage_returns() {
    assert_eq!(
        lex_all("a;\r\nb;\r\n"),
        [
            ident("a"),
            (TokenKind::Semicolon, ";".into()),
            ident("b"),
            (TokenKind::Semicolon, ";".into()),
        ]
    );
}

#[test]
fn test_edge_non_ascii_dropped() {
    assert_eq!(lex_all("café = 1;")[0], ident("caf"));
    assert!(lex_all("λ → ∞").is_empty());
}

#[test]
fn test_edge_nul_is_a_character() {
    assert_eq!(lex_all("a\0b"), [ident("a"), ident("b")]);
}

#[test]
fn test_edge_identifier_exactly_max() {
    let name = "v".repeat(31);
    assert_eq!(lex_all(&format!("{name};"))[0], ident(&name));
}

#[test]
fn test_edge_identifier_one_over_max() {
    let name = "v".repeat(32);
    let err = tokenize(&format!("int {name};")).unwrap_err();
    assert_eq!(
        err,
        LexError::LexemeTooLong {
            kind: TokenKind::Identifier,
            line: 1,
            column: 5,
            limit: 31,
        }
    );
}

#[test]
fn test_edge_long_letter_run_falls_to_identifier_error() {
    // Cut off by the limit inside keyword lookahead, then rejected by
    // identifier recognition
    let name = "w".repeat(40);
    assert!(matches!(
        tokenize(&name),
        Err(LexError::LexemeTooLong {
            kind: TokenKind::Identifier,
            ..
        })
    ));
}

#[test]
fn test_edge_long_identifier_unlimited() {
    let name = "a".repeat(10_000);
    let config = LexerConfig::default().with_max_lexeme_len(0);
    let tokens = Lexer::new(&format!("int {name} = 1;"), config)
        .tokenize()
        .unwrap();
    assert_eq!(tokens[1].text(), name);
}

#[test]
fn test_edge_error_line_number() {
    let source = format!("int a;\nint b;\n  {};", "z".repeat(64));
    match tokenize(&source) {
        Err(LexError::LexemeTooLong { line, column, .. }) => {
            assert_eq!((line, column), (3, 3));
        },
        other => panic!("expected LexemeTooLong, got {other:?}"),
    }
}

#[test]
fn test_edge_recognizers_never_build_empty_tokens() {
    let config = LexerConfig::default();
    let sources: Vec<String> = (0u8..128)
        .map(|b| (b as char).to_string())
        .chain(["".to_string(), "é".to_string()])
        .collect();

    for source in &sources {
        let mut lexer = Lexer::new(source, config);
        let results = [
            lexer.lex_keyword(),
            lexer.lex_identifier().unwrap(),
            lexer.lex_number().unwrap(),
            lexer.lex_operator(),
            lexer.lex_punctuation(TokenKind::Semicolon),
        ];
        for token in results.into_iter().flatten() {
            assert!(!token.text().is_empty(), "empty token for {source:?}");
        }
    }
}

// ==================== PROPERTY TESTS ====================

proptest! {
    #[test]
    fn prop_whitespace_only_is_empty(input in "[ \t\n]{0,200}") {
        prop_assert!(tokenize(&input).unwrap().is_empty());
    }

    #[test]
    fn prop_keyword_followed_by_boundary(
        index in 0..KEYWORDS.len(),
        boundary in "[ \t\n(){};+=,]",
    ) {
        let keyword = KEYWORDS[index];
        let tokens = tokenize(&format!("{keyword}{boundary}")).unwrap();
        prop_assert_eq!(tokens[0].kind(), TokenKind::Keyword);
        prop_assert_eq!(tokens[0].text(), keyword);
        prop_assert_eq!(tokens.iter().filter(|t| t.kind() == TokenKind::Keyword).count(), 1);
    }

    #[test]
    fn prop_identifier_run_is_one_token(input in "[a-zA-Z_][a-zA-Z0-9_]{0,30}") {
        prop_assume!(!KEYWORDS.contains(&input.as_str()));
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind(), TokenKind::Identifier);
        prop_assert_eq!(tokens[0].text(), input.as_str());
    }

    #[test]
    fn prop_keyword_prefix_never_splits(index in 0..KEYWORDS.len(), suffix in "[a-zA-Z0-9_]{1,8}") {
        let keyword = KEYWORDS[index];
        prop_assume!(!keyword.starts_with('#'));
        let tokens = tokenize(&format!("{keyword}{suffix}")).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind(), TokenKind::Identifier);
    }

    #[test]
    fn prop_digit_run_is_one_number(input in "[0-9]{1,31}") {
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind(), TokenKind::NumberLiteral);
        prop_assert_eq!(tokens[0].text(), input.as_str());
    }

    #[test]
    fn prop_scanning_is_deterministic(input in "[ -~\t\n]{0,200}") {
        let config = LexerConfig::default().with_max_lexeme_len(0);
        let first = Lexer::new(&input, config).tokenize();
        let second = Lexer::new(&input, config).tokenize();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_tokens_are_never_empty(input in "[ -~\t\n]{0,200}") {
        let config = LexerConfig::default().with_max_lexeme_len(0);
        for token in Lexer::new(&input, config).tokenize().unwrap() {
            prop_assert!(!token.text().is_empty());
            prop_assert_eq!(&input[token.span().start..token.span().end], token.text());
        }
    }
}
