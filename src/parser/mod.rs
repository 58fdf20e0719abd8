//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens
//! into a Program. It uses a Pratt parser for expressions with operator
//! precedence and handles:
//!
//! - Statement parsing (let, return, expression statements, blocks)
//! - Expression parsing (prefix and infix operators, grouping, literals, if/else)
//! - Non-fatal error reporting, so one bad statement does not stop the parse
//!
//! Expressions are built from prefix handlers (tokens that can start an
//! expression) and infix handlers (binary operators) looked up by token kind.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
