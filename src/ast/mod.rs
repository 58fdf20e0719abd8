/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree the parser builds
///
/// Submodules:
/// - ast: Program root and the Statement/Expression sums
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;
