//! Error types and error handling for the front-end.
//!
//! This module defines the diagnostics produced while turning source text
//! into a syntax tree. It includes:
//!
//! - Error structures with source position information
//! - Variants for lexing, expectation, prefix-dispatch and literal failures
//! - Short suggestions used when rendering a diagnostic

pub mod errors;
