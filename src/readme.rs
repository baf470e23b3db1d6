//! Best-effort README retrieval.
//!
//! [`try_fetch_readme`] reports every failure as a [`ReadmeError`].
//! [`fetch_readme`] is the only caller-facing entry point: it logs and drops
//! the error, so a missing or broken README never fails a search.

use crate::error::ReadmeError;
use crate::github::GitHubApi;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

/// Longest README kept, in characters.
pub const README_MAX_CHARS: usize = 5000;
pub const TRUNCATION_MARKER: &str = "\n\n[README truncated...]";

/// Fetches and decodes the README for `full_name`, discarding any failure.
pub fn fetch_readme<A: GitHubApi + ?Sized>(api: &A, full_name: &str) -> Option<String> {
    try_fetch_readme(api, full_name).unwrap_or_else(|e| {
        debug!(repo = full_name, error = %e, "README unavailable");
        None
    })
}

/// Fetches and decodes the README for `full_name`.
///
/// `Ok(None)` means the repository has no README or it is empty.
pub fn try_fetch_readme<A: GitHubApi + ?Sized>(
    api: &A,
    full_name: &str,
) -> Result<Option<String>, ReadmeError> {
    match api.readme(full_name)? {
        Some(response) => match response.content {
            Some(content) => decode_readme(&content),
            None => Ok(None),
        },
        None => Ok(None),
    }
}

/// Decodes line-wrapped base64 README content and applies truncation.
pub fn decode_readme(encoded: &str) -> Result<Option<String>, ReadmeError> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return Ok(None);
    }
    let bytes = STANDARD.decode(compact)?;
    let text = String::from_utf8(bytes)?;
    Ok(Some(truncate_readme(text)))
}

pub fn truncate_readme(mut text: String) -> String {
    if let Some((cut, _)) = text.char_indices().nth(README_MAX_CHARS) {
        text.truncate(cut);
        text.push_str(TRUNCATION_MARKER);
    }
    text
}
