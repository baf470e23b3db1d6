use crate::config::ToolConfig;
use crate::error::{Result, SearchError};
use crate::github::GitHubClient;
use crate::search;
use crate::token;
use crate::types::{Envelope, FailureOutput, SearchOutput};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

/// Read from the working directory when no argument or piped input is given.
pub const PARAMS_FILE: &str = "search_params.json";

/// Picks the parameter document: a non-blank argument, else piped stdin, else
/// `fallback` if it exists. `Ok(None)` means there is nothing to run.
pub fn resolve_input<R: Read>(
    argument: Option<String>,
    stdin_is_terminal: bool,
    mut stdin: R,
    fallback: &Path,
) -> io::Result<Option<String>> {
    if let Some(arg) = argument.filter(|a| !a.trim().is_empty()) {
        return Ok(Some(arg));
    }
    if !stdin_is_terminal {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        return Ok(Some(buf.trim().to_string()));
    }
    if fallback.exists() {
        return Ok(Some(fs::read_to_string(fallback)?.trim().to_string()));
    }
    Ok(None)
}

/// Runs a search against GitHub and writes the envelope. Success goes to
/// stdout, failure to stderr.
pub fn search_command(input: &str, pretty: bool) -> ExitCode {
    emit(search::execute(input, connect), pretty)
}

fn connect() -> Result<GitHubClient> {
    let config = ToolConfig::load()?;
    let token = token::discover();
    GitHubClient::new(&config, token.as_deref())
}

pub fn emit(result: Result<SearchOutput>, pretty: bool) -> ExitCode {
    let envelope = Envelope::from(result);
    match to_json(&envelope, pretty) {
        Ok(text) if envelope.is_success() => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Ok(text) => {
            eprintln!("{text}");
            ExitCode::FAILURE
        }
        Err(e) => {
            let err = SearchError::Unexpected(format!("failed to serialize output: {e}"));
            eprintln!("{}", failure_json(&err));
            ExitCode::FAILURE
        }
    }
}

/// Serializes an envelope. `pretty` applies to success envelopes only;
/// failures are always compact.
pub fn to_json(envelope: &Envelope, pretty: bool) -> serde_json::Result<String> {
    match envelope {
        Envelope::Success(_) if pretty => serde_json::to_string_pretty(envelope),
        _ => serde_json::to_string(envelope),
    }
}

pub fn failure_json(err: &SearchError) -> String {
    serde_json::to_string(&Envelope::Failure(FailureOutput::from(err))).unwrap_or_else(|_| {
        r#"{"success":false,"error":"unknown error","error_type":"unexpected_error"}"#.to_string()
    })
}
