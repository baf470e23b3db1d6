//! Alternative search strategies offered when a search comes back empty.
//!
//! Each heuristic runs independently and contributes at most one line. The
//! abbreviation check matches whole whitespace tokens while the topic check
//! matches substrings of the lowercased keywords; the two are kept apart on
//! purpose.

use crate::types::SearchParameters;

/// Short forms and their expansions, checked in this order.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("ml", "machine learning"),
    ("ai", "artificial intelligence"),
    ("dl", "deep learning"),
    ("nlp", "natural language processing"),
    ("cv", "computer vision"),
    ("eda", "exploratory data analysis"),
    ("etl", "extract transform load"),
    ("api", "application programming interface"),
    ("cli", "command line"),
    ("gui", "graphical user interface"),
    ("db", "database"),
    ("auth", "authentication"),
    ("auto", "automated OR automatic"),
];

/// Keyword substrings and the topic tag each suggests, checked in this order.
const TOPIC_HINTS: &[(&str, &str)] = &[
    ("data analysis", "data-science"),
    ("machine learning", "machine-learning"),
    ("web framework", "web"),
    ("automation", "automation"),
    ("visualization", "data-visualization"),
    ("api", "api"),
    ("cli", "cli"),
    ("testing", "testing"),
];

const STAR_FLOOR: u64 = 50;
const STAR_RELIEF_THRESHOLD: u64 = 100;

/// Produces ordered, human-readable suggestions for a zero-result search.
///
/// Never returns an empty list: when no heuristic applies, two generic
/// suggestions are emitted instead.
pub fn suggest(params: &SearchParameters) -> Vec<String> {
    let keywords = params.keywords.to_lowercase();
    let mut suggestions = Vec::new();

    if let Some(expanded) = expand_abbreviation(&keywords) {
        suggestions.push(format!("Try expanding abbreviations: \"{expanded}\""));
    }

    if params.min_stars > STAR_RELIEF_THRESHOLD {
        suggestions.push(format!(
            "Try lowering min_stars from {} to {} or {STAR_FLOOR}",
            params.min_stars,
            params.min_stars / 2
        ));
    }

    if let Some(language) = &params.language {
        suggestions.push(format!(
            "Try searching without the language filter (remove language: \"{language}\")"
        ));
    }

    let tokens: Vec<&str> = params.keywords.split_whitespace().collect();
    if tokens.len() > 2 {
        suggestions.push(format!("Try using fewer keywords: \"{}\"", tokens[..2].join(" ")));
    }

    if params.topic.is_none() {
        if let Some((_, topic)) = TOPIC_HINTS.iter().find(|(hint, _)| keywords.contains(hint)) {
            suggestions.push(format!("Try adding topic filter: topic:\"{topic}\""));
        }
    }

    if suggestions.is_empty() {
        suggestions.push("Try using more general or alternative keywords".to_string());
        suggestions.push("Check spelling and try common synonyms".to_string());
    }

    suggestions
}

/// Replaces every token equal to the first matching abbreviation.
fn expand_abbreviation(lowercased: &str) -> Option<String> {
    let tokens: Vec<&str> = lowercased.split_whitespace().collect();
    let (abbr, expansion) = ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| tokens.contains(abbr))?;

    let expanded: Vec<&str> = tokens
        .iter()
        .map(|t| if t == abbr { *expansion } else { *t })
        .collect();
    Some(expanded.join(" "))
}
