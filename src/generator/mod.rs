//! CSS generation module.
//!
//! Turns a folded stylesheet back into flat CSS rules. Variable assignments
//! are dropped and if clauses are resolved against their literal condition.

pub mod generator;
