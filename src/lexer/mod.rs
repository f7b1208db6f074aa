//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts stylesheet source
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, selectors, variable names and literals
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
