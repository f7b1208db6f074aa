//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Fatal errors with source position information (syntax, evaluation)
//! - Semantic diagnostics attached to AST nodes by the type checker
//! - The combined error returned by the compilation pipeline
//! - Helpful error messages and suggestions

pub mod errors;
