use std::fmt::Display;

use crate::{errors::errors::SemanticError, Span, IMPL_NODE};

use super::{ast::Node, types::ExpressionType};

// LITERALS

/// Literal values. Colors are kept as the source token, unparsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Color(String),
    Percentage(i32),
    Pixel(i32),
    Scalar(i32),
}

impl Literal {
    pub fn get_type(&self) -> ExpressionType {
        match self {
            Literal::Bool(_) => ExpressionType::Bool,
            Literal::Color(_) => ExpressionType::Color,
            Literal::Percentage(_) => ExpressionType::Percentage,
            Literal::Pixel(_) => ExpressionType::Pixel,
            Literal::Scalar(_) => ExpressionType::Scalar,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Bool(true) => write!(f, "TRUE"),
            Literal::Bool(false) => write!(f, "FALSE"),
            Literal::Color(color) => write!(f, "{}", color),
            Literal::Percentage(value) => write!(f, "{}%", value),
            Literal::Pixel(value) => write!(f, "{}px", value),
            Literal::Scalar(value) => write!(f, "{}", value),
        }
    }
}

/// Literal Expression
/// A literal value in an expression slot.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
    pub span: Span,
    pub error: Option<SemanticError>,
}

IMPL_NODE!(LiteralExpr);

/// Variable Reference
/// A use of a variable by name. Not a value until it is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableReference {
    pub name: String,
    pub span: Span,
    pub error: Option<SemanticError>,
}

IMPL_NODE!(VariableReference);

// COMPLEX

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
            Operator::Multiply => write!(f, "*"),
        }
    }
}

/// Operation
/// A binary arithmetic operation. Both operands are owned slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub operator: Operator,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
    pub span: Span,
    pub error: Option<SemanticError>,
}

IMPL_NODE!(Operation);

/// Expression
///
/// Anything that can sit in a value slot: declarations, assignments,
/// if conditions and operation operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(LiteralExpr),
    Reference(VariableReference),
    Operation(Operation),
}

impl Expression {
    pub fn literal(value: Literal, span: Span) -> Self {
        Expression::Literal(LiteralExpr {
            value,
            span,
            error: None,
        })
    }

    pub fn reference(name: &str, span: Span) -> Self {
        Expression::Reference(VariableReference {
            name: String::from(name),
            span,
            error: None,
        })
    }

    pub fn operation(operator: Operator, lhs: Expression, rhs: Expression, span: Span) -> Self {
        Expression::Operation(Operation {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            span,
            error: None,
        })
    }

    /// Returns the literal value if the expression is already folded.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Literal(literal) => Some(&literal.value),
            _ => None,
        }
    }
}

impl Node for Expression {
    fn get_span(&self) -> &Span {
        match self {
            Expression::Literal(literal) => literal.get_span(),
            Expression::Reference(reference) => reference.get_span(),
            Expression::Operation(operation) => operation.get_span(),
        }
    }
    fn get_error(&self) -> Option<&SemanticError> {
        match self {
            Expression::Literal(literal) => literal.get_error(),
            Expression::Reference(reference) => reference.get_error(),
            Expression::Operation(operation) => operation.get_error(),
        }
    }
    fn set_error(&mut self, error: SemanticError) {
        match self {
            Expression::Literal(literal) => literal.set_error(error),
            Expression::Reference(reference) => reference.set_error(error),
            Expression::Operation(operation) => operation.set_error(error),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(literal) => write!(f, "{}", literal.value),
            Expression::Reference(reference) => write!(f, "{}", reference.name),
            Expression::Operation(operation) => {
                write!(f, "({} {} {})", operation.lhs, operation.operator, operation.rhs)
            }
        }
    }
}
