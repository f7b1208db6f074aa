//! Unit tests for the parser module.
//!
//! This module contains tests for parsing:
//! - Variable assignments
//! - Style rules with tag, class and id selectors
//! - Declarations and if clauses
//! - Operator precedence and grouping
//! - Syntax errors

use std::rc::Rc;

use crate::{
    ast::{
        ast::Stmt,
        expressions::{Expression, Literal, Operator},
        statements::{Selector, Stylesheet},
    },
    errors::errors::Error,
    lexer::lexer::tokenize,
};

use super::parser::parse;

fn parse_source(source: &str) -> Result<Stylesheet, Error> {
    let tokens = tokenize(source.to_string(), Some("test.icss".to_string())).unwrap();
    let (_, result) = parse(tokens, Rc::new("test.icss".to_string()));
    result
}

fn first_declaration_expr(stylesheet: &Stylesheet) -> &Expression {
    match &stylesheet.body[0] {
        Stmt::Rule(rule) => match &rule.body[0] {
            Stmt::Declaration(declaration) => &declaration.expression,
            other => panic!("expected declaration, found {:?}", other),
        },
        other => panic!("expected rule, found {:?}", other),
    }
}

#[test]
fn test_parse_assignment() {
    let stylesheet = parse_source("LinkColor := #ff0000;").unwrap();

    match &stylesheet.body[0] {
        Stmt::Assignment(assignment) => {
            assert_eq!(assignment.name, "LinkColor");
            assert_eq!(
                assignment.expression.as_literal(),
                Some(&Literal::Color("#ff0000".to_string()))
            );
        }
        other => panic!("expected assignment, found {:?}", other),
    }
}

#[test]
fn test_parse_selectors() {
    let stylesheet = parse_source("p { } .menu { } #main { } #aabbcc { }").unwrap();

    let selectors: Vec<Selector> = stylesheet
        .iter()
        .map(|stmt| match stmt {
            Stmt::Rule(rule) => rule.selector.clone(),
            other => panic!("expected rule, found {:?}", other),
        })
        .collect();

    assert_eq!(
        selectors,
        vec![
            Selector::Tag("p".to_string()),
            Selector::Class("menu".to_string()),
            Selector::Id("main".to_string()),
            Selector::Id("aabbcc".to_string()),
        ]
    );
}

#[test]
fn test_parse_rule_body() {
    let source = "a {\n  Local := 2;\n  width: 10px;\n  if [TRUE] { height: 50%; }\n  span { color: #000000; }\n}";
    let stylesheet = parse_source(source).unwrap();

    let Stmt::Rule(rule) = &stylesheet.body[0] else {
        panic!("expected rule");
    };
    assert_eq!(rule.body.len(), 4);
    assert!(matches!(rule.body[0], Stmt::Assignment(_)));
    assert!(matches!(rule.body[1], Stmt::Declaration(_)));
    assert!(matches!(rule.body[3], Stmt::Rule(_)));

    let Stmt::If(if_clause) = &rule.body[2] else {
        panic!("expected if clause");
    };
    assert_eq!(if_clause.condition.as_literal(), Some(&Literal::Bool(true)));
    assert_eq!(if_clause.body.len(), 1);
}

#[test]
fn test_parse_literals() {
    let stylesheet = parse_source("a { width: 25%; }").unwrap();
    assert_eq!(
        first_declaration_expr(&stylesheet).as_literal(),
        Some(&Literal::Percentage(25))
    );

    let stylesheet = parse_source("a { width: 12px; }").unwrap();
    assert_eq!(
        first_declaration_expr(&stylesheet).as_literal(),
        Some(&Literal::Pixel(12))
    );
}

#[test]
fn test_multiplication_binds_tighter() {
    let stylesheet = parse_source("a { width: 1px + 2 * 3px; }").unwrap();

    let Expression::Operation(operation) = first_declaration_expr(&stylesheet) else {
        panic!("expected operation");
    };
    assert_eq!(operation.operator, Operator::Add);
    assert_eq!(operation.lhs.as_literal(), Some(&Literal::Pixel(1)));

    let Expression::Operation(rhs) = operation.rhs.as_ref() else {
        panic!("expected nested operation");
    };
    assert_eq!(rhs.operator, Operator::Multiply);
}

#[test]
fn test_additive_is_left_associative() {
    let stylesheet = parse_source("a { width: 10px - 2px - 3px; }").unwrap();

    let expr = first_declaration_expr(&stylesheet);
    assert_eq!(expr.to_string(), "((10px - 2px) - 3px)");
}

#[test]
fn test_parse_grouping() {
    let stylesheet = parse_source("a { width: (1px + 2px) * 3; }").unwrap();

    let expr = first_declaration_expr(&stylesheet);
    assert_eq!(expr.to_string(), "((1px + 2px) * 3)");
}

#[test]
fn test_operation_span_covers_operands() {
    let stylesheet = parse_source("a { width: 10px + Size; }").unwrap();

    let span = crate::ast::ast::Node::get_span(first_declaration_expr(&stylesheet));
    assert_eq!(span.start.0, 11);
    assert_eq!(span.end.0, 22);
}

#[test]
fn test_declaration_at_top_level_rejected() {
    let error = parse_source("width: 10px;").err().unwrap();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
    assert_eq!(error.get_position().0, 0);
}

#[test]
fn test_missing_semicolon() {
    let error = parse_source("a { width: 10px }").err().unwrap();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_unclosed_rule() {
    let error = parse_source("a { width: 10px;").err().unwrap();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_if_requires_brackets() {
    let error = parse_source("a { if TRUE { } }").err().unwrap();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_number_overflow() {
    let error = parse_source("a { width: 99999999999px; }").err().unwrap();

    assert_eq!(error.get_error_name(), "NumberParseError");
}
