use tbk::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputArgs {
    pub commands_path: PathBuf,
    pub prices_path: Option<PathBuf>,
    pub export_path: Option<PathBuf>,
    pub strict_symbols: bool,
}

/// Parses the input arguments, requiring the first positional argument to be a valid filepath.
///
/// Usage: `<commands.csv> [--prices <prices.csv>] [--export <transactions.csv>] [--strict-symbols]`
pub fn parse_input_args() -> Result<InputArgs> {
    return parse_args(env::args().skip(1));
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<InputArgs> {
    let mut commands_path = None;
    let mut prices_path = None;
    let mut export_path = None;
    let mut strict_symbols = false;

    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--prices" => {
                let filename = args.next().ok_or_else(|| {
                    InputArgsError::Parse("--prices must be followed by a file path.".to_string())
                })?;

                prices_path = Some(canonicalize(filename)?);
            }
            "--export" => {
                let filename = args.next().ok_or_else(|| {
                    InputArgsError::Parse("--export must be followed by a file path.".to_string())
                })?;

                export_path = Some(PathBuf::from(filename));
            }
            "--strict-symbols" => strict_symbols = true,
            flag if flag.starts_with("--") => {
                Err(InputArgsError::Parse(format!("Unknown option: {flag}")))?
            }
            filename => {
                if commands_path.is_some() {
                    Err(InputArgsError::Parse(format!("Unexpected argument: {filename}")))?
                }

                commands_path = Some(canonicalize(filename.to_string())?);
            }
        }
    }

    let commands_path = commands_path.ok_or_else(|| {
        InputArgsError::Parse("First argument must be the command file.".to_string())
    })?;

    return Ok(InputArgs {
        commands_path,
        prices_path,
        export_path,
        strict_symbols,
    });
}

fn canonicalize(filename: String) -> Result<PathBuf> {
    let path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    return Ok(path);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOME_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");

    fn to_args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn commands_path_only() {
        let input_args = parse_args(to_args(&[SOME_FILE])).unwrap();

        assert_eq!(input_args.commands_path, fs::canonicalize(SOME_FILE).unwrap());
        assert_eq!(input_args.prices_path, None);
        assert_eq!(input_args.export_path, None);
        assert!(!input_args.strict_symbols);
    }

    #[test]
    fn all_options() {
        let input_args = parse_args(to_args(&[
            "--strict-symbols",
            SOME_FILE,
            "--prices",
            SOME_FILE,
            "--export",
            "out.csv",
        ]))
        .unwrap();

        assert_eq!(input_args.prices_path, Some(fs::canonicalize(SOME_FILE).unwrap()));
        assert_eq!(input_args.export_path, Some(PathBuf::from("out.csv")));
        assert!(input_args.strict_symbols);
    }

    #[test]
    fn missing_commands_path() {
        assert!(parse_args(to_args(&[])).is_err());
        assert!(parse_args(to_args(&["--strict-symbols"])).is_err());
    }

    #[test]
    fn bad_arguments() {
        assert!(parse_args(to_args(&[SOME_FILE, "--verbose"])).is_err());
        assert!(parse_args(to_args(&[SOME_FILE, SOME_FILE])).is_err());
        assert!(parse_args(to_args(&[SOME_FILE, "--prices"])).is_err());
        assert!(parse_args(to_args(&["./does/not/exist.csv"])).is_err());
    }
}
