use std::fmt::Debug;

use crate::{errors::errors::SemanticError, Span};

use super::statements::{Declaration, IfClause, StyleRule, VariableAssignment};

/// Node Trait
///
/// Defines what every node in the tree carries: a source span and an
/// optional diagnostic attached by the type checker.
pub trait Node: Debug {
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
    /// Returns the error attached to the node, if any.
    fn get_error(&self) -> Option<&SemanticError>;
    /// Attaches an error, replacing any previous one.
    fn set_error(&mut self, error: SemanticError);
}

/// Statement Types
///
/// Everything that can appear in the body of a stylesheet, rule or if clause.
/// The parser only produces assignments and rules at the top level.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assignment(VariableAssignment),
    Rule(StyleRule),
    Declaration(Declaration),
    If(IfClause),
}

impl Node for Stmt {
    fn get_span(&self) -> &Span {
        match self {
            Stmt::Assignment(assignment) => assignment.get_span(),
            Stmt::Rule(rule) => rule.get_span(),
            Stmt::Declaration(declaration) => declaration.get_span(),
            Stmt::If(if_clause) => if_clause.get_span(),
        }
    }
    fn get_error(&self) -> Option<&SemanticError> {
        match self {
            Stmt::Assignment(assignment) => assignment.get_error(),
            Stmt::Rule(rule) => rule.get_error(),
            Stmt::Declaration(declaration) => declaration.get_error(),
            Stmt::If(if_clause) => if_clause.get_error(),
        }
    }
    fn set_error(&mut self, error: SemanticError) {
        match self {
            Stmt::Assignment(assignment) => assignment.set_error(error),
            Stmt::Rule(rule) => rule.set_error(error),
            Stmt::Declaration(declaration) => declaration.set_error(error),
            Stmt::If(if_clause) => if_clause.set_error(error),
        }
    }
}
