//! Integration tests for the front-end.
//!
//! These tests drive the public API end to end: source text through the
//! lexer and parser into a rendered program, and the REPL over in-memory
//! input and output.

use std::io::Cursor;

use monkey::{
    ast::ast::{Expression, Statement},
    format_error,
    lexer::{lexer::tokenize, source::TokenStream},
    parser::parser::{parse, parse_source},
    repl::{self, ReplMode},
};

fn run_repl(input: &str, mode: ReplMode) -> String {
    let mut output = Vec::new();
    repl::start(Cursor::new(input.to_string()), &mut output, mode).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_parse_program_from_tokens() {
    let tokens = tokenize("let x = 5;\nlet y = 10;\nlet foobar = 838383;".to_string(), None).unwrap();
    let (parser, program) = parse(TokenStream::new(tokens));

    assert!(parser.errors().is_empty());
    let names = program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Statement::Let(let_stmt) => let_stmt.name.value.clone(),
            other => panic!("expected let statement, got {:?}", other),
        })
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["x", "y", "foobar"]);
}

#[test]
fn test_round_trip_rendering() {
    let source = "let max = if (a > b) { a } else { b };\nreturn max * 2 + -offset;";
    let (parser, program) = parse_source(source, Some("max.monkey".to_string()));

    assert!(parser.errors().is_empty(), "{:?}", parser.errors());
    assert_eq!(
        program.to_string(),
        "let max = if(a > b) aelse b;return ((max * 2) + (-offset));"
    );
}

#[test]
fn test_if_expression_shape() {
    let (_, program) = parse_source("if (x < y) { x } else { y }", None);

    let Statement::Expression(stmt) = &program.statements[0] else {
        panic!("expected expression statement");
    };
    let Expression::If(if_expr) = &stmt.expression else {
        panic!("expected if expression");
    };

    assert_eq!(if_expr.condition.to_string(), "(x < y)");
    assert_eq!(if_expr.consequence.to_string(), "x");
    assert_eq!(if_expr.alternative.as_ref().map(|alt| alt.to_string()), Some("y".to_string()));
}

#[test]
fn test_malformed_input_is_reported_not_fatal() {
    let source = "let = ;\n) 5 +;\nlet ok = true;";
    let (parser, program) = parse_source(source, Some("broken.monkey".to_string()));

    assert!(!parser.errors().is_empty());
    assert!(program
        .statements
        .iter()
        .any(|stmt| stmt.to_string() == "let ok = true;"));

    for error in parser.diagnostics() {
        let rendered = format_error(error, source);
        assert!(rendered.starts_with("Error: "));
        assert!(rendered.contains("-> broken.monkey"));
    }
}

#[test]
fn test_format_error_on_second_line() {
    let source = "let a = 1;\n  let b 2;";
    let (parser, _) = parse_source(source, None);

    let rendered = format_error(&parser.diagnostics()[0], source);
    let lines = rendered.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], "Error: UnexpectedToken (expected `=`, found `INT`)");
    assert_eq!(lines[3], "2 | let b 2;");
    assert_eq!(lines[4], "  | ------^");
}

#[test]
fn test_repl_prints_tokens() {
    let output = run_repl("let x = 5;\n", ReplMode::Tokens);

    assert_eq!(
        output,
        ">> {Type:LET Literal:let}\n{Type:IDENT Literal:x}\n{Type:= Literal:=}\n{Type:INT Literal:5}\n{Type:; Literal:;}\n>> "
    );
}

#[test]
fn test_repl_prints_illegal_tokens() {
    let output = run_repl("a @\n", ReplMode::Tokens);

    assert_eq!(output, ">> {Type:IDENT Literal:a}\n{Type:ILLEGAL Literal:@}\n>> ");
}

#[test]
fn test_repl_parses_lines() {
    let output = run_repl("let x = 1 + 2 * 3;\n-a\n", ReplMode::Ast);

    assert_eq!(output, ">> let x = (1 + (2 * 3));\n>> (-a)\n>> ");
}

#[test]
fn test_repl_reports_diagnostics() {
    let output = run_repl("let = 5\n", ReplMode::Ast);

    assert!(output.contains("Error: UnexpectedToken"));
    assert!(output.contains("Error: NoPrefixParseFn"));
    assert!(output.ends_with(">> "));
}

#[test]
fn test_repl_stops_on_closed_input() {
    assert_eq!(run_repl("", ReplMode::Tokens), ">> ");
    assert_eq!(run_repl("\n", ReplMode::Ast), ">> \n>> ");
}

#[test]
fn test_greeting_names_user() {
    assert_eq!(repl::greeting("ada"), "Monkey-Language by MKTP called by ada");
}
