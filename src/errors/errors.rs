use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::ExpressionType, Position, Span};

/// A fatal error raised while lexing, parsing, evaluating or generating.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnresolvedVariable { .. } => "UnresolvedVariable",
            ErrorImpl::UnsupportedOperation { .. } => "UnsupportedOperation",
            ErrorImpl::UnfoldedExpression => "UnfoldedExpression",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnresolvedVariable { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` has no value here", variable))
            }
            ErrorImpl::UnsupportedOperation { operator, lhs, rhs } => {
                ErrorTip::Suggestion(format!(
                    "Cannot apply `{}` to `{}` and `{}`",
                    operator, lhs, rhs
                ))
            }
            ErrorImpl::UnfoldedExpression => ErrorTip::Suggestion(String::from(
                "Expressions must be evaluated before generating css",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("variable {variable:?} has no assigned value")]
    UnresolvedVariable { variable: String },
    #[error("unsupported operation: {lhs} {operator} {rhs}")]
    UnsupportedOperation {
        operator: String,
        lhs: String,
        rhs: String,
    },
    #[error("expression was not folded to a literal")]
    UnfoldedExpression,
}

/// A non-fatal problem attached to a node by the type checker.
///
/// The display text is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    #[error("Variable used but undefined in current scope.")]
    UndefinedVariable { variable: String },
    #[error("Expected color literal for color declaration.")]
    InvalidColorValue { property: String },
    #[error("Expected percentage or pixel literal for width or height declaration.")]
    InvalidDimensionValue {
        property: String,
        found: ExpressionType,
    },
    #[error("If condition must be of type boolean.")]
    InvalidConditionType { found: ExpressionType },
    #[error("Expected operands of the same type for addition or subtraction.")]
    InvalidOperands {
        operator: String,
        lhs: ExpressionType,
        rhs: ExpressionType,
    },
    #[error("Expected a scalar operand in multiplication.")]
    InvalidMultiplication {
        lhs: ExpressionType,
        rhs: ExpressionType,
    },
}

impl SemanticError {
    pub fn get_error_name(&self) -> &str {
        match self {
            SemanticError::UndefinedVariable { .. } => "UndefinedVariable",
            SemanticError::InvalidColorValue { .. } => "InvalidColorValue",
            SemanticError::InvalidDimensionValue { .. } => "InvalidDimensionValue",
            SemanticError::InvalidConditionType { .. } => "InvalidConditionType",
            SemanticError::InvalidOperands { .. } => "InvalidOperands",
            SemanticError::InvalidMultiplication { .. } => "InvalidMultiplication",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            SemanticError::UndefinedVariable { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is not assigned in this rule or globally",
                variable
            )),
            SemanticError::InvalidColorValue { property } => ErrorTip::Suggestion(format!(
                "`{}` expects a color such as `#ff0000`",
                property
            )),
            SemanticError::InvalidDimensionValue { property, found } => {
                ErrorTip::Suggestion(format!(
                    "`{}` expects pixels or a percentage, received `{}`",
                    property, found
                ))
            }
            SemanticError::InvalidConditionType { found } => {
                ErrorTip::Suggestion(format!("Expected type `bool`, received `{}`", found))
            }
            SemanticError::InvalidOperands { operator, lhs, rhs } => {
                ErrorTip::Suggestion(format!(
                    "Cannot apply `{}` to `{}` and `{}`",
                    operator, lhs, rhs
                ))
            }
            SemanticError::InvalidMultiplication { lhs, rhs } => ErrorTip::Suggestion(format!(
                "Cannot multiply `{}` by `{}`, one side must be a scalar",
                lhs, rhs
            )),
        }
    }
}

/// A semantic error together with the span of the node carrying it.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub error: SemanticError,
    pub span: Span,
}

/// Everything that can stop a compilation.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("{0}")]
    Syntax(Error),
    #[error("{0}")]
    Evaluation(Error),
    #[error("{} semantic error(s) found", .0.len())]
    Semantic(Vec<Diagnostic>),
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
