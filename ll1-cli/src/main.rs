mod render;
mod samples;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use ll1::{analyze, AnalysisError, ParseOptions, DEFAULT_STEP_LIMIT};
use log::{info, warn};
use thiserror::Error;

use crate::samples::Sample;

/// LL(1) grammar analyzer.
///
/// Prints the derivation of the input. Exits with 0 when the input is
/// accepted, 1 when it is rejected, and 2 on errors.
#[derive(Parser)]
#[command(name = "ll1", version, about = "LL(1) grammar analyzer")]
struct Cli {
    /// Path to the grammar file, one production per line
    #[arg(required_unless_present = "example")]
    grammar: Option<PathBuf>,

    /// Input to parse, terminals optionally separated by whitespace
    #[arg(conflicts_with = "input_file")]
    input: Option<String>,

    /// Read the input from a file
    #[arg(long)]
    input_file: Option<PathBuf>,

    /// Print FIRST and FOLLOW sets
    #[arg(long)]
    sets: bool,

    /// Print the parse table
    #[arg(long)]
    table: bool,

    /// Maximal number of parse steps
    #[arg(long, default_value_t = DEFAULT_STEP_LIMIT)]
    max_steps: usize,

    /// Parse without a step limit
    #[arg(long, conflicts_with = "max_steps")]
    no_step_limit: bool,

    /// Use a built-in grammar and input (1: statement lists, 2: a function declaration)
    #[arg(long, value_enum, conflicts_with = "grammar")]
    example: Option<Sample>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("no input given")]
    NoInput,
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the input was accepted.
fn run(cli: &Cli) -> Result<bool, CliError> {
    let (grammar, input) = load_sources(cli)?;
    let options = if cli.no_step_limit {
        ParseOptions::unlimited()
    } else {
        ParseOptions {
            step_limit: Some(cli.max_steps),
        }
    };
    info!("parsing with {:?}", options);

    let analysis = analyze(&grammar, &input, &options)?;
    if analysis.table.overwritten_cells() != 0 {
        warn!(
            "the grammar is not LL(1): {} table cells were overwritten",
            analysis.table.overwritten_cells()
        );
    }

    if cli.sets {
        println!("{}", render::sets(&analysis));
    }
    if cli.table {
        println!("{}", render::table(&analysis));
    }
    print!("{}", render::trace(&analysis));
    println!("{}", render::status(&analysis));

    Ok(analysis.trace.is_accepted())
}

fn load_sources(cli: &Cli) -> Result<(String, String), CliError> {
    let grammar = match (&cli.grammar, cli.example) {
        (Some(path), _) => read(path)?,
        (None, Some(sample)) => sample.grammar().to_string(),
        (None, None) => return Err(CliError::NoInput),
    };
    let input = match (&cli.input, &cli.input_file, cli.example) {
        (Some(input), _, _) => input.clone(),
        (None, Some(path), _) => read(path)?,
        (None, None, Some(sample)) => sample.input().to_string(),
        (None, None, None) => return Err(CliError::NoInput),
    };
    Ok((grammar, input))
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments() {
        let cli = Cli::try_parse_from(["ll1", "grammar.txt", "id = id", "--table"]).unwrap();
        assert_eq!(cli.grammar, Some(PathBuf::from("grammar.txt")));
        assert_eq!(cli.input.as_deref(), Some("id = id"));
        assert!(cli.table);
        assert_eq!(cli.max_steps, DEFAULT_STEP_LIMIT);

        let cli = Cli::try_parse_from(["ll1", "--example", "2", "--no-step-limit"]).unwrap();
        assert_eq!(cli.example, Some(Sample::Functions));
        assert!(cli.no_step_limit);

        assert!(Cli::try_parse_from(["ll1"]).is_err());
        assert!(Cli::try_parse_from(["ll1", "g", "--max-steps", "3", "--no-step-limit"]).is_err());
    }

    #[test]
    fn test_run_example() {
        let cli = Cli::try_parse_from(["ll1", "--example", "1", "--max-steps", "5"]).unwrap();
        assert!(!run(&cli).unwrap());

        let cli = Cli::try_parse_from(["ll1", "--example", "1"]).unwrap();
        assert!(run(&cli).unwrap());
    }

    #[test]
    fn test_missing_file() {
        let cli = Cli::try_parse_from(["ll1", "/nonexistent/grammar", "id"]).unwrap();
        assert!(matches!(run(&cli), Err(CliError::Read { .. })));
    }
}
