//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//! - The `TokenSource` contract the parser pulls tokens through

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
