use crate::{
    ast::{
        ast::{Program, Statement},
        expressions::Identifier,
        statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::Precedence, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

/// Parses statements until the current token is one of `terminators`.
///
/// A statement that fails is recorded and skipped, along with a `;` directly
/// after the failure point. Input nested too deeply is abandoned up to the end
/// of input, which also closes every enclosing block. The loop always moves one token forward so the
/// next statement can still be parsed.
fn parse_stmts(parser: &mut Parser, terminators: &[TokenKind]) -> Vec<Statement> {
    let mut body = vec![];

    while !terminators.contains(&parser.current_token_kind()) {
        match parse_stmt(parser) {
            Ok(stmt) => {
                tracing::trace!("parsed statement `{}` at offset {}", stmt, stmt.get_span().start.0);
                body.push(stmt);
            }
            Err(error) => {
                let too_deep = matches!(error.get_kind(), ErrorImpl::NestingTooDeep { .. });
                parser.record(error);
                if too_deep {
                    parser.skip_to_eof();
                } else if parser.peek_is(TokenKind::Semicolon) {
                    parser.advance();
                }
            }
        }
        parser.advance();
    }

    body
}

pub fn parse_program(parser: &mut Parser) -> Program {
    Program {
        statements: parse_stmts(parser, &[TokenKind::EOF]),
    }
}

/// Parses a `{ ... }` block. The current token must be the opening brace.
///
/// Stops on the closing brace, or on end of input in which case the
/// statements read so far are still returned.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStatement {
    let token = parser.advance();

    BlockStatement {
        token,
        statements: parse_stmts(parser, &[TokenKind::CloseCurly, TokenKind::EOF]),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    // A bare `return` leaves the cursor on the keyword so the enclosing loop sees `}` or EOF.
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
        return Ok(Statement::Return(ReturnStatement { token, value: None }));
    }
    if parser.peek_is(TokenKind::CloseCurly) || parser.peek_is(TokenKind::EOF) {
        return Ok(Statement::Return(ReturnStatement { token, value: None }));
    }

    parser.advance();
    let value = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Return(ReturnStatement { token, value: Some(value) }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Expression(ExpressionStatement { token, expression }))
}
