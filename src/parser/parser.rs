//! Parser implementation for building the syntax tree.
//!
//! This module contains the Parser struct, which combines the two-token
//! cursor over a `TokenSource` with the diagnostics collected while parsing,
//! and the public entry points that drive it.

use std::mem;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{precedence_of, Precedence},
    stmt::parse_program,
};

/// Deepest expression nesting the parser accepts before giving up on the input.
pub const MAX_NESTING_DEPTH: usize = 64;

/// The main parser structure that maintains parsing state.
///
/// Holds the current and next token pulled from the token source and the
/// ordered list of diagnostics recorded so far. One parser serves one input.
pub struct Parser {
    /// Where tokens are pulled from
    source: Box<dyn TokenSource>,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics in the order they were recorded
    errors: Vec<Error>,
    /// Expressions currently being built, innermost included
    depth: usize,
}

impl Parser {
    /// Creates a new Parser, pulling two tokens so both `current` and `peek` are valid.
    pub fn new(source: impl TokenSource + 'static) -> Self {
        let mut source: Box<dyn TokenSource> = Box::new(source);
        let current = source.next_token();
        let peek = source.next_token();

        Parser {
            source,
            current,
            peek,
            errors: vec![],
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the next token without advancing.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the lookahead into the current slot and returns the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.source.next_token();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances only if the next token has the expected kind.
    ///
    /// # Returns
    ///
    /// The token that became current, or an `UnexpectedToken` error located at
    /// the offending token. The cursor does not move on failure.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_is(expected_kind) {
            self.advance();
            Ok(self.current.clone())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    received: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ))
        }
    }

    pub fn current_precedence(&self) -> Precedence {
        precedence_of(self.current.kind)
    }

    pub fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind)
    }

    /// Enters one more level of expression nesting.
    ///
    /// Fails with `NestingTooDeep` at the current token once `MAX_NESTING_DEPTH`
    /// levels are open. Every successful call must be paired with `leave_nested`.
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_NESTING_DEPTH },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Drops every remaining token so all open statement loops end.
    pub fn skip_to_eof(&mut self) {
        while !self.current_is(TokenKind::EOF) {
            self.advance();
        }
    }

    /// Appends a diagnostic without interrupting the parse.
    pub fn record(&mut self, error: Error) {
        tracing::debug!("parse error: {}", error);
        self.errors.push(error);
    }

    /// Diagnostic messages in the order they were recorded.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Structured diagnostics, with positions, in the order they were recorded.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses statements until the end of input.
    pub fn parse_program(&mut self) -> Program {
        parse_program(self)
    }
}

/// Parses everything a token source yields into a Program.
///
/// This never fails: problems are reported through `Parser::errors` and the
/// affected statements are left out of the program.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (holding the diagnostics)
/// - The parsed Program
pub fn parse(source: impl TokenSource + 'static) -> (Parser, Program) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    (parser, program)
}

/// Lexes and parses a source string.
///
/// `file` names the source in diagnostics and defaults to `shell`.
pub fn parse_source(source: &str, file: Option<String>) -> (Parser, Program) {
    parse(Lexer::new(source.to_string(), file))
}
