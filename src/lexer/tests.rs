//! Unit tests for the lexer module.
//!
//! Covers the literal kinds, selectors, variable names, reserved words,
//! punctuation, comments and the unrecognised character error.

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.icss".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_reserved_words() {
    let tokens = tokenize("if TRUE FALSE".to_string(), Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[1].kind, TokenKind::True);
    assert_eq!(tokens[2].kind, TokenKind::False);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_literals() {
    let tokens = tokenize("10px 50% 3 #ff00AA".to_string(), Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Pixel);
    assert_eq!(tokens[0].value, "10px");
    assert_eq!(tokens[1].kind, TokenKind::Percentage);
    assert_eq!(tokens[1].value, "50%");
    assert_eq!(tokens[2].kind, TokenKind::Scalar);
    assert_eq!(tokens[2].value, "3");
    assert_eq!(tokens[3].kind, TokenKind::Color);
    assert_eq!(tokens[3].value, "#ff00AA");
}

#[test]
fn test_tokenize_selectors() {
    let tokens = tokenize("p .menu #main".to_string(), Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "p");
    assert_eq!(tokens[1].kind, TokenKind::ClassSelector);
    assert_eq!(tokens[1].value, ".menu");
    assert_eq!(tokens[2].kind, TokenKind::IdSelector);
    assert_eq!(tokens[2].value, "#main");
}

#[test]
fn test_hash_with_six_non_hex_chars_is_id() {
    assert_eq!(kinds("#header"), vec![TokenKind::IdSelector, TokenKind::EOF]);
    assert_eq!(kinds("#abc"), vec![TokenKind::IdSelector, TokenKind::EOF]);
}

#[test]
fn test_tokenize_variables_and_properties() {
    let tokens = tokenize(
        "LinkColor background-color".to_string(),
        Some("test.icss".to_string()),
    )
    .unwrap();

    assert_eq!(tokens[0].kind, TokenKind::VariableIdent);
    assert_eq!(tokens[0].value, "LinkColor");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "background-color");
}

#[test]
fn test_tokenize_assignment_statement() {
    assert_eq!(
        kinds("Width := 10px + 2 * 5px;"),
        vec![
            TokenKind::VariableIdent,
            TokenKind::Assignment,
            TokenKind::Pixel,
            TokenKind::Plus,
            TokenKind::Scalar,
            TokenKind::Star,
            TokenKind::Pixel,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("{ } [ ] ( ) : - "),
        vec![
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Colon,
            TokenKind::Dash,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "// line comment\na /* block\ncomment */ { }";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Identifier,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("a { width: 10px; }".to_string(), Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens[2].value, "width");
    assert_eq!(tokens[2].span.start.0, 4);
    assert_eq!(tokens[2].span.end.0, 9);
    assert_eq!(tokens[4].span.start.0, 11);
    assert_eq!(*tokens[4].span.start.1, "test.icss");
}

#[test]
fn test_unrecognised_token() {
    let result = tokenize("a { width: 10px @ }".to_string(), Some("test.icss".to_string()));

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 16);
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("   \n\t"), vec![TokenKind::EOF]);
}
