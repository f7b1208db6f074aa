use crate::{ast::{ast::Stmt, statements::{Declaration, IfClause, Selector, StyleRule, VariableAssignment}}, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind, parser::{expr::parse_expr, lookups::BindingPower}, Span};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expected a variable assignment, declaration, if clause or style rule")),
    }
}

/// Parses `{ stmt* }`, the body of a rule or an if clause.
pub fn parse_body(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut body = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(parser.unexpected("expected `}` before end of file"));
        }
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;
    Ok(body)
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name_token = parser.advance();

    let error = Error::new(ErrorImpl::UnexpectedTokenDetailed { token: parser.current_token().value.clone(), message: String::from("expected `:=` after variable name") }, parser.get_position());
    parser.expect_error(TokenKind::Assignment, Some(error))?;

    let expression = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Assignment(VariableAssignment {
        name: name_token.value,
        expression,
        span: Span {
            start: name_token.span.start,
            end
        },
        error: None
    }))
}

/// A lowercase identifier starts either a declaration (`width: 10px;`) or a
/// rule with a tag selector (`p { ... }`).
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.peek_kind() == TokenKind::Colon {
        parse_declaration_stmt(parser)
    } else {
        parse_rule_stmt(parser)
    }
}

pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let property = parser.advance();
    parser.expect(TokenKind::Colon)?;

    let expression = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Declaration(Declaration {
        property: property.value,
        expression,
        span: Span {
            start: property.span.start,
            end
        },
        error: None
    }))
}

pub fn parse_rule_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let selector_token = parser.advance();

    let selector = match selector_token.kind {
        TokenKind::Identifier => Selector::Tag(selector_token.value.clone()),
        TokenKind::ClassSelector => Selector::Class(selector_token.value[1..].to_string()),
        TokenKind::IdSelector | TokenKind::Color => Selector::Id(selector_token.value[1..].to_string()),
        _ => return Err(Error::new(ErrorImpl::UnexpectedToken { token: selector_token.value }, selector_token.span.start)),
    };

    let body = parse_body(parser)?;

    Ok(Stmt::Rule(StyleRule {
        selector,
        body,
        span: Span {
            start: selector_token.span.start,
            end: parser.get_position()
        },
        error: None
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let error = Error::new(ErrorImpl::UnexpectedTokenDetailed { token: parser.current_token().value.clone(), message: String::from("expected `[` before if condition") }, parser.get_position());
    parser.expect_error(TokenKind::OpenBracket, Some(error))?;

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseBracket)?;

    let body = parse_body(parser)?;

    Ok(Stmt::If(IfClause {
        condition,
        body,
        span: Span {
            start,
            end: parser.get_position()
        },
        error: None
    }))
}
