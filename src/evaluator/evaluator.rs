use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::{
        ast::{Node, Stmt},
        expressions::{Expression, Literal, Operation, Operator, VariableReference},
        statements::{Stylesheet, VariableAssignment},
    },
    errors::errors::{Error, ErrorImpl},
};

/// Folds every expression in a type-checked stylesheet into a literal.
///
/// Assigned values are kept in one map per open rule, mirroring the scopes
/// the checker validated. References resolve in the innermost rule, then
/// globally.
#[derive(Debug)]
pub struct Evaluator {
    variable_values: Vec<HashMap<String, Literal>>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            variable_values: vec![HashMap::new()],
        }
    }

    pub fn evaluate(&mut self, stylesheet: &mut Stylesheet) -> Result<(), Error> {
        self.evaluate_body(&mut stylesheet.body)
    }

    fn evaluate_body(&mut self, body: &mut [Stmt]) -> Result<(), Error> {
        for stmt in body.iter_mut() {
            self.evaluate_stmt(stmt)?;
        }
        Ok(())
    }

    /// If bodies are folded whatever their condition, so an assignment
    /// under `if [FALSE]` still rebinds the variable for the rest of the rule.
    fn evaluate_stmt(&mut self, stmt: &mut Stmt) -> Result<(), Error> {
        match stmt {
            Stmt::Assignment(assignment) => self.assign(assignment),
            Stmt::Declaration(declaration) => self.fold_expression(&mut declaration.expression),
            Stmt::If(if_clause) => {
                self.fold_expression(&mut if_clause.condition)?;
                self.evaluate_body(&mut if_clause.body)
            }
            Stmt::Rule(rule) => {
                self.variable_values.push(HashMap::new());
                let result = self.evaluate_body(&mut rule.body);
                self.variable_values.pop();
                result
            }
        }
    }

    fn assign(&mut self, assignment: &mut VariableAssignment) -> Result<(), Error> {
        let value = self.evaluate_expression(&assignment.expression)?;
        debug!("Assigned `{}` = {}", assignment.name, value);

        let span = assignment.expression.get_span().clone();
        assignment.expression = Expression::literal(value.clone(), span);

        if let Some(scope) = self.variable_values.last_mut() {
            scope.insert(assignment.name.clone(), value);
        }
        Ok(())
    }

    /// Replaces `expr` with the literal it evaluates to. Literals are left
    /// untouched, so folding an already folded slot does nothing.
    pub fn fold_expression(&self, expr: &mut Expression) -> Result<(), Error> {
        if let Expression::Literal(_) = expr {
            return Ok(());
        }

        let value = self.evaluate_expression(expr)?;
        trace!("Folded `{}` into {}", expr, value);

        let span = expr.get_span().clone();
        *expr = Expression::literal(value, span);
        Ok(())
    }

    pub fn evaluate_expression(&self, expr: &Expression) -> Result<Literal, Error> {
        match expr {
            Expression::Literal(literal) => Ok(literal.value.clone()),
            Expression::Reference(reference) => self.resolve(reference),
            Expression::Operation(operation) => self.evaluate_operation(operation),
        }
    }

    /// Looks in the innermost scope, then the global one. Enclosing rules
    /// are skipped, matching what the checker resolved.
    fn resolve(&self, reference: &VariableReference) -> Result<Literal, Error> {
        self.variable_values
            .last()
            .and_then(|scope| scope.get(&reference.name))
            .or_else(|| {
                self.variable_values
                    .first()
                    .and_then(|global| global.get(&reference.name))
            })
            .cloned()
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::UnresolvedVariable {
                        variable: reference.name.clone(),
                    },
                    reference.span.start.clone(),
                )
            })
    }

    fn evaluate_operation(&self, operation: &Operation) -> Result<Literal, Error> {
        let lhs = self.evaluate_expression(&operation.lhs)?;
        let rhs = self.evaluate_expression(&operation.rhs)?;

        apply_operation(operation.operator, &lhs, &rhs).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnsupportedOperation {
                    operator: operation.operator.to_string(),
                    lhs: lhs.to_string(),
                    rhs: rhs.to_string(),
                },
                operation.span.start.clone(),
            )
        })
    }
}

/// Applies an arithmetic operator to two literals.
///
/// `+` and `-` work on two literals of the same numeric kind. `*` takes a
/// scalar on either side and keeps the kind of the other operand. Every
/// other combination yields `None`.
pub fn apply_operation(operator: Operator, lhs: &Literal, rhs: &Literal) -> Option<Literal> {
    match operator {
        Operator::Add => match (lhs, rhs) {
            (Literal::Percentage(a), Literal::Percentage(b)) => Some(Literal::Percentage(a.wrapping_add(*b))),
            (Literal::Pixel(a), Literal::Pixel(b)) => Some(Literal::Pixel(a.wrapping_add(*b))),
            (Literal::Scalar(a), Literal::Scalar(b)) => Some(Literal::Scalar(a.wrapping_add(*b))),
            _ => None,
        },
        Operator::Subtract => match (lhs, rhs) {
            (Literal::Percentage(a), Literal::Percentage(b)) => Some(Literal::Percentage(a.wrapping_sub(*b))),
            (Literal::Pixel(a), Literal::Pixel(b)) => Some(Literal::Pixel(a.wrapping_sub(*b))),
            (Literal::Scalar(a), Literal::Scalar(b)) => Some(Literal::Scalar(a.wrapping_sub(*b))),
            _ => None,
        },
        Operator::Multiply => match (lhs, rhs) {
            (Literal::Scalar(a), Literal::Scalar(b)) => Some(Literal::Scalar(a.wrapping_mul(*b))),
            (Literal::Scalar(scalar), Literal::Pixel(value))
            | (Literal::Pixel(value), Literal::Scalar(scalar)) => {
                Some(Literal::Pixel(scalar.wrapping_mul(*value)))
            }
            (Literal::Scalar(scalar), Literal::Percentage(value))
            | (Literal::Percentage(value), Literal::Scalar(scalar)) => {
                Some(Literal::Percentage(scalar.wrapping_mul(*value)))
            }
            _ => None,
        },
    }
}

/// Folds every variable reference and operation in `stylesheet` into a
/// literal. Only meaningful on a stylesheet the type checker accepted.
pub fn evaluate(stylesheet: &mut Stylesheet) -> Result<(), Error> {
    let mut evaluator = Evaluator::new();
    evaluator.evaluate(stylesheet)
}
