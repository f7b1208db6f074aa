/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` trait and the statement enum
/// - expressions: Literals, variable references and operations
/// - statements: Stylesheet, rules, declarations, assignments and if clauses
/// - types: Semantic types assigned to expressions by the checker
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
