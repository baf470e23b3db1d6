//! Construction of the provider's search query dialect.

use crate::types::SearchParameters;

/// Builds the `q` value for a repository search.
///
/// Keywords go first and verbatim, followed by the `language:`, `stars:>=`
/// and `topic:` qualifiers in that order. Encoding is left to the transport.
pub fn build_query(params: &SearchParameters) -> String {
    let mut parts = vec![params.keywords.clone()];

    if let Some(language) = &params.language {
        parts.push(format!("language:{language}"));
    }
    if params.min_stars > 0 {
        parts.push(format!("stars:>={}", params.min_stars));
    }
    if let Some(topic) = &params.topic {
        parts.push(format!("topic:{topic}"));
    }

    parts.join(" ")
}
