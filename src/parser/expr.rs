use crate::{
    ast::{
        ast::Expression,
        expressions::{Boolean, Identifier, IfExpression, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{infix_handler, prefix_handler, Precedence},
    parser::Parser,
    stmt::parse_block_stmt,
};

/// Precedence climbing over the handler tables.
///
/// Starts from the prefix handler of the current token, then keeps folding
/// the next operator into the left operand while it binds tighter than
/// `precedence`. Equal precedence does not recurse, which makes chains of
/// the same operator group to the left.
///
/// Every prefix, group or `if` nests one level deeper; past
/// `MAX_NESTING_DEPTH` levels the expression fails with `NestingTooDeep`.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expression, Error> {
    parser.enter_nested()?;
    let expr = parse_nested_expr(parser, precedence);
    parser.leave_nested();

    expr
}

fn parse_nested_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expression, Error> {
    let token_kind = parser.current_token_kind();
    let Some(prefix) = prefix_handler(token_kind) else {
        return Err(Error::new(ErrorImpl::NoPrefixParseFn { kind: token_kind }, parser.get_position()));
    };

    let mut left = prefix(parser)?;

    while !parser.peek_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some(infix) = infix_handler(parser.peek_token_kind()) else {
            return Ok(left);
        };

        parser.advance();
        left = infix(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    Ok(Expression::Identifier(Identifier { value: token.value.clone(), token }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match parse_integer(&token.value) {
        Some(value) => Ok(Expression::Integer(IntegerLiteral { token, value })),
        None => Err(Error::new(ErrorImpl::IntegerParseError { token: token.value }, token.span.start)),
    }
}

/// Converts integer literal text, picking the base from its prefix.
///
/// `0x` is hexadecimal, `0o` or a bare leading `0` octal, `0b` binary and
/// anything else decimal. Single underscores may separate digits.
pub fn parse_integer(text: &str) -> Option<i64> {
    let (radix, digits) = match text.get(..2) {
        Some("0x" | "0X") => (16, &text[2..]),
        Some("0o" | "0O") => (8, &text[2..]),
        Some("0b" | "0B") => (2, &text[2..]),
        _ if text.len() > 1 && text.starts_with('0') => (8, &text[1..]),
        _ => (10, text),
    };

    if digits.ends_with('_') || digits.contains("__") {
        return None;
    }

    let cleaned = digits.replace('_', "");
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    i64::from_str_radix(&cleaned, radix).ok()
}

pub fn parse_boolean(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    Ok(Expression::Boolean(Boolean { value: token.is(TokenKind::True), token }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, Precedence::Prefix)?;

    Ok(Expression::Prefix(PrefixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Result<Expression, Error> {
    let precedence = parser.current_precedence();
    let operator_token = parser.advance();
    let right = parse_expr(parser, precedence)?;

    Ok(Expression::Infix(InfixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouped_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expression, Error> {
    // if (<condition>) { <consequence> } else { <alternative> }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Ok(Expression::If(IfExpression {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}
