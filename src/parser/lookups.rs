use crate::{ast::ast::Expression, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Binding strength of an operator, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    // Reserved for call syntax, nothing binds here yet
    Call,
}

pub type PrefixHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type InfixHandler = fn(&mut Parser, Expression) -> Result<Expression, Error>;

/// Builder for expressions that start with a token of this kind.
pub fn prefix_handler(kind: TokenKind) -> Option<PrefixHandler> {
    let handler: PrefixHandler = match kind {
        TokenKind::Identifier => parse_identifier,
        TokenKind::Integer => parse_integer_literal,
        TokenKind::True | TokenKind::False => parse_boolean,
        TokenKind::Not | TokenKind::Dash => parse_prefix_expr,
        TokenKind::OpenParen => parse_grouped_expr,
        TokenKind::If => parse_if_expr,
        _ => return None,
    };

    Some(handler)
}

/// Combiner for binary operators of this kind.
pub fn infix_handler(kind: TokenKind) -> Option<InfixHandler> {
    let handler: InfixHandler = match kind {
        TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::LessEquals
        | TokenKind::GreaterEquals => parse_infix_expr,
        _ => return None,
    };

    Some(handler)
}

/// Kinds missing from the table bind at `Lowest`.
pub fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => Precedence::Equals,
        TokenKind::Less | TokenKind::Greater | TokenKind::LessEquals | TokenKind::GreaterEquals => {
            Precedence::LessGreater
        }
        TokenKind::Plus | TokenKind::Dash => Precedence::Sum,
        TokenKind::Star | TokenKind::Slash => Precedence::Product,
        _ => Precedence::Lowest,
    }
}
