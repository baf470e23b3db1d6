//! Parsing of the JSON input document into [`SearchParameters`].

use crate::error::{Result, SearchError};
use crate::types::{SearchParameters, SortBy};
use serde::Deserialize;

/// Wire shape of the input. Every field is optional here so that a missing
/// `keywords` is reported with its own message instead of a serde error.
#[derive(Deserialize, Debug, Default)]
struct RawParameters {
    keywords: Option<String>,
    language: Option<String>,
    min_stars: Option<i64>,
    topic: Option<String>,
    sort_by: Option<String>,
    max_results: Option<i64>,
    include_readme: Option<bool>,
    fallback_search: Option<bool>,
}

/// Parses and normalizes the input JSON.
///
/// # Errors
///
/// Returns [`SearchError::Validation`] for malformed JSON, a non-object
/// document, a field of the wrong type, or a missing or blank `keywords`.
pub fn parse_parameters(json: &str) -> Result<SearchParameters> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| SearchError::Validation(format!("Invalid JSON: {e}")))?;
    if !value.is_object() {
        return Err(SearchError::Validation(
            "Invalid JSON: expected an object of search parameters".into(),
        ));
    }
    let raw: RawParameters = serde_json::from_value(value)
        .map_err(|e| SearchError::Validation(format!("Invalid parameters: {e}")))?;

    let keywords = match raw.keywords {
        Some(k) if !k.trim().is_empty() => k,
        Some(_) => return Err(SearchError::Validation("'keywords' must not be empty".into())),
        None => return Err(SearchError::Validation("'keywords' is required".into())),
    };

    Ok(SearchParameters {
        keywords,
        language: non_empty(raw.language),
        min_stars: raw.min_stars.map_or(0, |n| n.max(0) as u64),
        topic: non_empty(raw.topic),
        sort_by: raw.sort_by.as_deref().map_or(SortBy::Stars, SortBy::parse),
        max_results: clamp_max_results(raw.max_results),
        include_readme: raw.include_readme.unwrap_or(true),
        fallback_search: raw.fallback_search.unwrap_or(true),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn clamp_max_results(requested: Option<i64>) -> u8 {
    match requested {
        Some(n) if n >= 1 => n.min(i64::from(SearchParameters::MAX_RESULTS_CAP)) as u8,
        _ => SearchParameters::DEFAULT_MAX_RESULTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_message(json: &str) -> String {
        match parse_parameters(json) {
            Err(SearchError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_applied() {
        let params = parse_parameters(r#"{"keywords": "python web framework"}"#).unwrap();
        assert_eq!(params, SearchParameters::new("python web framework"));
    }

    #[test]
    fn all_fields_parsed() {
        let params = parse_parameters(
            r#"{"keywords": "x", "language": "go", "min_stars": 50, "topic": "cli",
                "sort_by": "updated", "max_results": 3, "include_readme": false,
                "fallback_search": false, "ignored": [1, 2]}"#,
        )
        .unwrap();
        assert_eq!(params.language.as_deref(), Some("go"));
        assert_eq!(params.min_stars, 50);
        assert_eq!(params.topic.as_deref(), Some("cli"));
        assert_eq!(params.sort_by, SortBy::Updated);
        assert_eq!(params.max_results, 3);
        assert!(!params.include_readme);
        assert!(!params.fallback_search);
    }

    #[test]
    fn max_results_clamped() {
        let parse = |n: &str| {
            parse_parameters(&format!(r#"{{"keywords": "x", "max_results": {n}}}"#))
                .unwrap()
                .max_results
        };
        assert_eq!(parse("25"), 10);
        assert_eq!(parse("10"), 10);
        assert_eq!(parse("1"), 1);
        assert_eq!(parse("0"), 5);
        assert_eq!(parse("-3"), 5);
        assert_eq!(parse("null"), 5);
    }

    #[test]
    fn unknown_sort_falls_back_to_stars() {
        let params = parse_parameters(r#"{"keywords": "x", "sort_by": "best-match"}"#).unwrap();
        assert_eq!(params.sort_by, SortBy::Stars);
    }

    #[test]
    fn negative_min_stars_means_no_threshold() {
        let params = parse_parameters(r#"{"keywords": "x", "min_stars": -5}"#).unwrap();
        assert_eq!(params.min_stars, 0);
    }

    #[test]
    fn empty_filters_count_as_absent() {
        let params =
            parse_parameters(r#"{"keywords": "x", "language": "", "topic": ""}"#).unwrap();
        assert!(params.language.is_none());
        assert!(params.topic.is_none());
    }

    #[test]
    fn missing_keywords_rejected() {
        assert_eq!(validation_message(r#"{"language": "rust"}"#), "'keywords' is required");
    }

    #[test]
    fn blank_keywords_rejected() {
        assert_eq!(validation_message(r#"{"keywords": "   "}"#), "'keywords' must not be empty");
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(validation_message("{keywords: x").starts_with("Invalid JSON"));
        assert!(validation_message("[1, 2]").starts_with("Invalid JSON"));
    }

    #[test]
    fn wrong_field_type_rejected() {
        let msg = validation_message(r#"{"keywords": "x", "min_stars": "lots"}"#);
        assert!(msg.starts_with("Invalid parameters"));
    }
}
