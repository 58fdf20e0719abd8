//! Line-oriented interactive front-end.
//!
//! Reads one line at a time and either dumps its tokens or parses it and
//! prints the rendered program. Stops when the input is closed.

use std::io::{self, BufRead, Write};

use clap::ValueEnum;

use crate::{
    format_error,
    lexer::{lexer::Lexer, source::TokenSource, tokens::TokenKind},
    parser::parser::parse_source,
};

pub const PROMPT: &str = ">> ";

/// Banner printed once before the first prompt.
pub fn greeting(user: &str) -> String {
    format!("Monkey-Language by MKTP called by {}", user)
}

/// What each line read by the REPL is turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReplMode {
    /// Print every token as `{Type:<kind> Literal:<text>}`
    #[default]
    Tokens,
    /// Parse the line and print the program, or its diagnostics
    Ast,
}

pub fn start<R: BufRead, W: Write>(input: R, mut output: W, mode: ReplMode) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        match mode {
            ReplMode::Tokens => print_tokens(&line, &mut output)?,
            ReplMode::Ast => print_program(&line, &mut output)?,
        }
    }
}

fn print_tokens<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    let mut lexer = Lexer::new(line.to_string(), None);

    loop {
        let token = lexer.next_token();
        if token.is(TokenKind::EOF) {
            return Ok(());
        }
        writeln!(output, "{}", token)?;
    }
}

fn print_program<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    let (parser, program) = parse_source(line, None);

    if parser.diagnostics().is_empty() {
        return writeln!(output, "{}", program);
    }

    for error in parser.diagnostics() {
        writeln!(output, "{}", format_error(error, line))?;
    }
    Ok(())
}
