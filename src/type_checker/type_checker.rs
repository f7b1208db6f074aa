use log::{debug, trace};

use crate::{
    ast::{
        ast::{Node, Stmt},
        expressions::{Expression, Operator},
        statements::{Declaration, IfClause, StyleRule, Stylesheet, VariableAssignment},
        types::ExpressionType,
    },
    errors::errors::{Diagnostic, SemanticError},
};

use super::scope::ScopeStack;

#[derive(Debug, Default)]
pub struct TypeChecker {
    pub scopes: ScopeStack,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            scopes: ScopeStack::new(),
        }
    }

    /// Walks the whole stylesheet once, attaching errors to offending nodes.
    pub fn check(&mut self, stylesheet: &mut Stylesheet) {
        for stmt in stylesheet.iter_mut() {
            self.check_stmt(stmt);
        }
    }

    fn check_stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::Assignment(assignment) => self.check_assignment(assignment),
            Stmt::Rule(rule) => self.check_rule(rule),
            Stmt::Declaration(declaration) => self.check_declaration(declaration),
            Stmt::If(if_clause) => self.check_if(if_clause),
        }
    }

    fn check_rule(&mut self, rule: &mut StyleRule) {
        self.scopes.enter_scope();
        debug!("Checking rule `{}` at scope depth {}", rule.selector, self.scopes.depth());

        for stmt in rule.body.iter_mut() {
            self.check_stmt(stmt);
        }

        self.scopes.leave_scope();
    }

    fn check_assignment(&mut self, assignment: &mut VariableAssignment) {
        self.check_expr(&mut assignment.expression);

        let variable_type = self.expression_type(&assignment.expression);
        trace!("Variable `{}` has type {}", assignment.name, variable_type);
        self.scopes
            .declare_variable(assignment.name.clone(), variable_type);
    }

    fn check_declaration(&mut self, declaration: &mut Declaration) {
        if let Some(error) = self.check_declaration_value(declaration) {
            declaration.set_error(error);
        }
        self.check_expr(&mut declaration.expression);
    }

    fn check_if(&mut self, if_clause: &mut IfClause) {
        if let Some(error) = self.check_condition(&if_clause.condition) {
            if_clause.set_error(error);
        }
        self.check_expr(&mut if_clause.condition);

        // If clauses share the scope of the enclosing rule
        for stmt in if_clause.body.iter_mut() {
            self.check_stmt(stmt);
        }
    }

    /// Flags undefined variables and operand mismatches inside an expression.
    fn check_expr(&mut self, expr: &mut Expression) {
        match expr {
            Expression::Literal(_) => {}
            Expression::Reference(reference) => {
                if self.scopes.resolve(&reference.name).is_none() {
                    reference.set_error(SemanticError::UndefinedVariable {
                        variable: reference.name.clone(),
                    });
                }
            }
            Expression::Operation(operation) => {
                self.check_expr(&mut operation.lhs);
                self.check_expr(&mut operation.rhs);

                let lhs = self.expression_type(&operation.lhs);
                let rhs = self.expression_type(&operation.rhs);
                if let Err(error) = operation_type(operation.operator, lhs, rhs) {
                    operation.set_error(error);
                }
            }
        }
    }

    fn check_declaration_value(&self, declaration: &Declaration) -> Option<SemanticError> {
        let property = &declaration.property;

        if property.contains("color") {
            let is_color = match &declaration.expression {
                Expression::Literal(literal) => literal.value.get_type() == ExpressionType::Color,
                Expression::Reference(reference) => self
                    .scopes
                    .find_type(&reference.name, |t| t == ExpressionType::Color)
                    .is_some(),
                Expression::Operation(_) => false,
            };

            if !is_color {
                return Some(SemanticError::InvalidColorValue {
                    property: property.clone(),
                });
            }
        }

        if property.contains("width") || property.contains("height") {
            if let Expression::Reference(reference) = &declaration.expression {
                let found = self.scopes.find_type(&reference.name, |t| {
                    matches!(
                        t,
                        ExpressionType::Scalar | ExpressionType::Color | ExpressionType::Bool
                    )
                });

                if let Some(found) = found {
                    return Some(SemanticError::InvalidDimensionValue {
                        property: property.clone(),
                        found,
                    });
                }
            }
        }

        None
    }

    /// Conditions must be a boolean literal or a global boolean variable.
    fn check_condition(&self, condition: &Expression) -> Option<SemanticError> {
        let is_bool = match condition {
            Expression::Literal(literal) => literal.value.get_type() == ExpressionType::Bool,
            Expression::Reference(reference) => {
                self.scopes.get_global(&reference.name) == Some(ExpressionType::Bool)
            }
            Expression::Operation(_) => false,
        };

        if is_bool {
            None
        } else {
            Some(SemanticError::InvalidConditionType {
                found: self.expression_type(condition),
            })
        }
    }

    /// Infers the type of an expression from the scopes visible right now.
    pub fn expression_type(&self, expr: &Expression) -> ExpressionType {
        match expr {
            Expression::Literal(literal) => literal.value.get_type(),
            Expression::Reference(reference) => self
                .scopes
                .resolve(&reference.name)
                .unwrap_or(ExpressionType::Undefined),
            Expression::Operation(operation) => {
                let lhs = self.expression_type(&operation.lhs);
                let rhs = self.expression_type(&operation.rhs);
                operation_type(operation.operator, lhs, rhs).unwrap_or(ExpressionType::Undefined)
            }
        }
    }
}

/// Result type of applying `operator` to operands of the given types.
///
/// `+` and `-` need two operands of the same numeric type. `*` needs a
/// scalar on at least one side and yields the type of the other side.
/// An undefined operand has already been reported, so it yields
/// `Undefined` without a new error.
pub fn operation_type(
    operator: Operator,
    lhs: ExpressionType,
    rhs: ExpressionType,
) -> Result<ExpressionType, SemanticError> {
    if lhs == ExpressionType::Undefined || rhs == ExpressionType::Undefined {
        return Ok(ExpressionType::Undefined);
    }

    match operator {
        Operator::Add | Operator::Subtract => {
            if lhs == rhs && lhs.is_numeric() {
                Ok(lhs)
            } else {
                Err(SemanticError::InvalidOperands {
                    operator: operator.to_string(),
                    lhs,
                    rhs,
                })
            }
        }
        Operator::Multiply => match (lhs, rhs) {
            (ExpressionType::Scalar, other) | (other, ExpressionType::Scalar)
                if other.is_numeric() =>
            {
                Ok(other)
            }
            _ => Err(SemanticError::InvalidMultiplication { lhs, rhs }),
        },
    }
}

/// Type checks `stylesheet` in place and returns every attached error in
/// depth-first order. An empty result means the stylesheet is well typed.
pub fn type_check(stylesheet: &mut Stylesheet) -> Vec<Diagnostic> {
    let mut type_checker = TypeChecker::new();
    type_checker.check(stylesheet);

    stylesheet.diagnostics()
}
