use log::debug;

use crate::{
    ast::{
        ast::{Node, Stmt},
        expressions::{Expression, Literal},
        statements::{Declaration, StyleRule, Stylesheet},
    },
    errors::errors::{Error, ErrorImpl},
};

const INDENT: &str = "  ";

/// Emits plain CSS for a folded stylesheet.
///
/// Rules are separated by a blank line. If clauses are resolved here: a
/// `TRUE` body is inlined into the enclosing rule, a `FALSE` body is dropped.
/// Nested rules become blocks of their own, emitted after their parent
/// with the parent's selector in front (`a { p { } }` gives `a p`).
pub fn generate(stylesheet: &Stylesheet) -> Result<String, Error> {
    let mut blocks = vec![];

    for stmt in stylesheet.iter() {
        if let Stmt::Rule(rule) = stmt {
            emit_rule(rule, None, &mut blocks)?;
        }
    }

    debug!("Generated {} css blocks", blocks.len());
    Ok(blocks.join("\n"))
}

fn emit_rule(rule: &StyleRule, parent: Option<&str>, blocks: &mut Vec<String>) -> Result<(), Error> {
    let selector = match parent {
        Some(parent) => format!("{} {}", parent, rule.selector),
        None => rule.selector.to_string(),
    };

    let mut declarations = vec![];
    let mut nested = vec![];
    collect_body(&rule.body, &mut declarations, &mut nested)?;

    let mut out = String::new();
    out.push_str(&selector);
    out.push_str(" {\n");
    for declaration in declarations {
        emit_declaration(declaration, &mut out)?;
    }
    out.push_str("}\n");
    blocks.push(out);

    for nested_rule in nested {
        emit_rule(nested_rule, Some(&selector), blocks)?;
    }
    Ok(())
}

fn collect_body<'a>(
    body: &'a [Stmt],
    declarations: &mut Vec<&'a Declaration>,
    nested: &mut Vec<&'a StyleRule>,
) -> Result<(), Error> {
    for stmt in body {
        match stmt {
            Stmt::Declaration(declaration) => declarations.push(declaration),
            Stmt::Rule(rule) => nested.push(rule),
            Stmt::If(if_clause) => {
                if literal_of(&if_clause.condition)? == &Literal::Bool(true) {
                    collect_body(&if_clause.body, declarations, nested)?;
                }
            }
            Stmt::Assignment(_) => {}
        }
    }
    Ok(())
}

fn emit_declaration(declaration: &Declaration, out: &mut String) -> Result<(), Error> {
    let value = literal_of(&declaration.expression)?;

    out.push_str(INDENT);
    out.push_str(&declaration.property);
    out.push_str(": ");
    out.push_str(&value.to_string());
    out.push_str(";\n");
    Ok(())
}

fn literal_of(expr: &Expression) -> Result<&Literal, Error> {
    expr.as_literal().ok_or_else(|| {
        Error::new(ErrorImpl::UnfoldedExpression, expr.get_span().start.clone())
    })
}
