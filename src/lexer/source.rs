use std::collections::VecDeque;

use crate::Position;

use super::tokens::{Token, TokenKind};

/// Anything the parser can pull tokens from.
///
/// Implementations must eventually yield an EOF token and keep yielding it
/// on every later call.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// A token source over an already tokenized input.
///
/// Tokens after the first EOF are discarded. If the input carries no EOF
/// token one is synthesized at a null position.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens: VecDeque<Token> = tokens.into();

        let eof = match tokens.iter().position(|token| token.is(TokenKind::EOF)) {
            Some(index) => {
                let eof = tokens[index].clone();
                tokens.truncate(index);
                eof
            }
            None => Token::eof(Position::null()),
        };

        TokenStream { tokens, eof }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        self.tokens
            .pop_front()
            .unwrap_or_else(|| self.eof.clone())
    }
}
