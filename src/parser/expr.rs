use crate::{ast::{ast::Node, expressions::{Expression, Literal, Operator}}, errors::errors::{Error, ErrorImpl}, lexer::tokens::{Token, TokenKind}, Span};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(nud) => nud,
        None => return Err(parser.unexpected("expected a literal, variable or `(`")),
    };

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while let Some(next_bp) = parser.get_bp_lookup().get(&parser.current_token_kind()).copied() {
        if next_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&parser.current_token_kind()).copied() {
            Some(led) => led,
            None => return Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position())),
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

fn parse_number(token: &Token, suffix: &str) -> Result<i32, Error> {
    token.value
        .trim_end_matches(suffix)
        .parse()
        .map_err(|_| Error::new(ErrorImpl::NumberParseError { token: token.value.clone() }, token.span.start.clone()))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    let value = match token.kind {
        TokenKind::Pixel => Literal::Pixel(parse_number(&token, "px")?),
        TokenKind::Percentage => Literal::Percentage(parse_number(&token, "%")?),
        TokenKind::Scalar => Literal::Scalar(parse_number(&token, "")?),
        TokenKind::Color => Literal::Color(token.value.clone()),
        TokenKind::True => Literal::Bool(true),
        TokenKind::False => Literal::Bool(false),
        TokenKind::VariableIdent => {
            parser.advance();
            return Ok(Expression::reference(&token.value, token.span));
        }
        _ => {
            return Err(Error::new(ErrorImpl::UnexpectedToken { token: token.value }, token.span.start));
        }
    };

    parser.advance();
    Ok(Expression::literal(value, token.span))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expression, bp: BindingPower) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let operator = match operator_token.kind {
        TokenKind::Plus => Operator::Add,
        TokenKind::Dash => Operator::Subtract,
        TokenKind::Star => Operator::Multiply,
        _ => return Err(Error::new(ErrorImpl::UnexpectedToken { token: operator_token.value }, operator_token.span.start)),
    };

    let right = parse_expr(parser, bp)?;

    let span = Span {
        start: left.get_span().start.clone(),
        end: right.get_span().end.clone()
    };

    Ok(Expression::operation(operator, left, right, span))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
