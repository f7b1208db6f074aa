use std::{
    fmt::Display,
    slice::{Iter, IterMut},
};

use crate::{
    errors::errors::{Diagnostic, SemanticError},
    Span, IMPL_NODE,
};

use super::{
    ast::{Node, Stmt},
    expressions::Expression,
};

/// Selector of a style rule. Only read for code generation.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    Tag(String),
    Class(String),
    Id(String),
}

impl Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Tag(name) => write!(f, "{}", name),
            Selector::Class(name) => write!(f, ".{}", name),
            Selector::Id(name) => write!(f, "#{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub expression: Expression,
    pub span: Span,
    pub error: Option<SemanticError>,
}

IMPL_NODE!(Declaration);

/// `Name := expression;`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignment {
    pub name: String,
    pub expression: Expression,
    pub span: Span,
    pub error: Option<SemanticError>,
}

IMPL_NODE!(VariableAssignment);

/// `if [condition] { body }`
///
/// Shares the scope of the enclosing rule.
#[derive(Debug, Clone, PartialEq)]
pub struct IfClause {
    pub condition: Expression,
    pub body: Vec<Stmt>,
    pub span: Span,
    pub error: Option<SemanticError>,
}

IMPL_NODE!(IfClause);

/// `selector { body }`
///
/// Introduces one lexical scope for the assignments in its body.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selector: Selector,
    pub body: Vec<Stmt>,
    pub span: Span,
    pub error: Option<SemanticError>,
}

IMPL_NODE!(StyleRule);

/// Root of the tree: global assignments and top-level rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Stylesheet {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, Stmt> {
        self.body.iter_mut()
    }

    /// Collects every attached error, depth first and left to right.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = vec![];
        for stmt in self.iter() {
            collect_stmt(stmt, &mut diagnostics);
        }
        diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics().is_empty()
    }
}

fn push_error(node: &dyn Node, diagnostics: &mut Vec<Diagnostic>) {
    if let Some(error) = node.get_error() {
        diagnostics.push(Diagnostic {
            error: error.clone(),
            span: node.get_span().clone(),
        });
    }
}

fn collect_stmt(stmt: &Stmt, diagnostics: &mut Vec<Diagnostic>) {
    push_error(stmt, diagnostics);
    match stmt {
        Stmt::Assignment(assignment) => collect_expr(&assignment.expression, diagnostics),
        Stmt::Declaration(declaration) => collect_expr(&declaration.expression, diagnostics),
        Stmt::Rule(rule) => rule.body.iter().for_each(|s| collect_stmt(s, diagnostics)),
        Stmt::If(if_clause) => {
            collect_expr(&if_clause.condition, diagnostics);
            if_clause.body.iter().for_each(|s| collect_stmt(s, diagnostics));
        }
    }
}

fn collect_expr(expr: &Expression, diagnostics: &mut Vec<Diagnostic>) {
    push_error(expr, diagnostics);
    if let Expression::Operation(operation) = expr {
        collect_expr(&operation.lhs, diagnostics);
        collect_expr(&operation.rhs, diagnostics);
    }
}
