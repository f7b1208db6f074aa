//! Expression evaluation (constant folding) module.
//!
//! Runs after a clean type check and rewrites the tree in place:
//!
//! - Variable assignments are evaluated and their values recorded
//! - Variable references are replaced by the value they are bound to
//! - Operations are computed from their folded operands
//!
//! Afterwards every declaration and if condition holds a literal.

pub mod evaluator;
