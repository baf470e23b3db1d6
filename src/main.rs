use clap::{CommandFactory, Parser};
use reposcout::commands::{self, PARAMS_FILE};
use reposcout::SearchError;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXAMPLES: &str = r#"Examples:
  reposcout '{"keywords": "python web framework"}'
  reposcout '{"keywords": "react components", "language": "typescript", "min_stars": 1000}'
  echo '{"keywords": "python", "max_results": 1}' | reposcout"#;

/// Search GitHub repositories with filters and README enrichment
#[derive(Parser)]
#[command(name = "reposcout", version, about, long_about = None, after_help = EXAMPLES)]
struct Cli {
    /// JSON search parameters (read from stdin when omitted and piped)
    parameters: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the result envelope.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reposcout=warn")),
        )
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let is_terminal = stdin.is_terminal();
    let fallback = Path::new(PARAMS_FILE);
    let input = match commands::resolve_input(cli.parameters, is_terminal, stdin.lock(), fallback) {
        Ok(Some(input)) => input,
        Ok(None) => {
            let _ = Cli::command().print_help();
            return ExitCode::FAILURE;
        }
        Err(e) => {
            let err = SearchError::Unexpected(format!("failed to read parameters: {e}"));
            eprintln!("{}", commands::search::failure_json(&err));
            return ExitCode::FAILURE;
        }
    };

    commands::search_command(&input, cli.pretty)
}
