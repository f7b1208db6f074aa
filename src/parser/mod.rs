//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a stylesheet tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Style rules with tag, class and id selectors
//! - Declarations, variable assignments and if clauses
//! - Arithmetic expressions over literals and variables
//! - Error reporting with source positions
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
