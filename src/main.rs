use std::{env, fs::read_to_string, io, path::Path, time::Instant};

use anyhow::Context;
use clap::Parser;
use monkey::{cli::MonkeyArgs, format_error, parser::parser::parse_source, repl};

//--------------------------------------------------------------------------------------------------
// Functions: main
//--------------------------------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = MonkeyArgs::parse();
    match args.file {
        Some(path) => parse_file(&path),
        None => {
            let user = env::var("USER").unwrap_or_else(|_| String::from("unknown"));
            println!("{}", repl::greeting(&user));
            repl::start(io::stdin().lock(), io::stdout().lock(), args.mode)?;
            Ok(())
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Functions: *
//--------------------------------------------------------------------------------------------------

fn parse_file(path: &Path) -> anyhow::Result<()> {
    let source = read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string());

    let start = Instant::now();
    let (parser, program) = parse_source(&source, file_name);
    tracing::info!("parsed {} statements in {:?}", program.statements.len(), start.elapsed());

    let diagnostics = parser.diagnostics();
    if !diagnostics.is_empty() {
        for error in diagnostics {
            eprintln!("{}", format_error(error, &source));
        }
        anyhow::bail!("{} parse error(s) in {}", diagnostics.len(), path.display());
    }

    println!("{}", program);
    Ok(())
}
