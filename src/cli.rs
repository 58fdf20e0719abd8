use std::path::PathBuf;

use clap::Parser;

use crate::repl::ReplMode;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Monkey language front-end
#[derive(Debug, Parser)]
#[command(name = "monkey", author, version, about)]
pub struct MonkeyArgs {
    /// What the REPL does with each line
    #[arg(short, long, value_enum, default_value_t = ReplMode::Tokens)]
    pub mode: ReplMode,

    /// Parse this file and print the program instead of starting the REPL
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_defaults_to_token_repl() {
        let args = MonkeyArgs::try_parse_from(["monkey"]).unwrap();

        assert_eq!(args.mode, ReplMode::Tokens);
        assert!(args.file.is_none());
    }

    #[test]
    fn test_mode_and_file() {
        let args = MonkeyArgs::try_parse_from(["monkey", "--mode", "ast", "-f", "prog.monkey"]).unwrap();

        assert_eq!(args.mode, ReplMode::Ast);
        assert_eq!(args.file, Some(PathBuf::from("prog.monkey")));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(MonkeyArgs::try_parse_from(["monkey", "--mode", "eval"]).is_err());
    }
}
