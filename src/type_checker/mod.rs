//! Type checking and semantic analysis module.
//!
//! This module verifies a parsed stylesheet before any expression is
//! evaluated. In a single depth-first walk it:
//!
//! - Resolves variable references against the rule scope and the global scope
//! - Checks color, width and height declarations against their value types
//! - Requires if conditions to be boolean
//! - Checks that arithmetic operands have compatible types
//!
//! Problems are attached to the offending nodes instead of aborting the walk,
//! so one pass reports every independent error.

pub mod scope;
pub mod type_checker;
