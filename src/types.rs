use crate::error::{ErrorType, SearchError};
use serde::{Deserialize, Serialize};

/// Provider sort keys. Order is always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Stars,
    Forks,
    Updated,
    HelpWantedIssues,
}

impl SortBy {
    /// Parses a sort key, falling back to [`SortBy::Stars`] for anything unknown.
    pub fn parse(value: &str) -> Self {
        match value {
            "forks" => SortBy::Forks,
            "updated" => SortBy::Updated,
            "help-wanted-issues" => SortBy::HelpWantedIssues,
            _ => SortBy::Stars,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Stars => "stars",
            SortBy::Forks => "forks",
            SortBy::Updated => "updated",
            SortBy::HelpWantedIssues => "help-wanted-issues",
        }
    }
}

/// Validated search input. Built by [`crate::params::parse_parameters`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameters {
    pub keywords: String,
    pub language: Option<String>,
    pub min_stars: u64,
    pub topic: Option<String>,
    pub sort_by: SortBy,
    /// Always within `1..=10`.
    pub max_results: u8,
    pub include_readme: bool,
    /// Accepted for compatibility; suggestions fire on every empty result.
    pub fallback_search: bool,
}

impl SearchParameters {
    pub const DEFAULT_MAX_RESULTS: u8 = 5;
    pub const MAX_RESULTS_CAP: u8 = 10;

    /// Parameters with every optional field at its default.
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            language: None,
            min_stars: 0,
            topic: None,
            sort_by: SortBy::Stars,
            max_results: Self::DEFAULT_MAX_RESULTS,
            include_readme: true,
            fallback_search: true,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GitHubLicense {
    pub spdx_id: Option<String>,
}

/// One search hit as returned by the provider.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GitHubRepo {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub pushed_at: String,
    pub license: Option<GitHubLicense>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GitHubSearchResponse {
    #[serde(default)]
    pub items: Vec<GitHubRepo>,
}

/// Body of the provider's README resource.
#[derive(Deserialize, Debug, Default)]
pub struct ReadmeResponse {
    pub content: Option<String>,
}

/// Normalized repository emitted in the success envelope.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub url: String,
    pub stars: u64,
    pub forks: u64,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub pushed_at: String,
    pub open_issues: u64,
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme_content: Option<String>,
}

pub const NO_RESULTS_MESSAGE: &str =
    "No repositories found matching your criteria. See suggestions for alternative searches.";

/// Success envelope. Only constructible through [`SearchOutput::new`], which
/// keeps `count` and the zero-result fields consistent with `repositories`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchOutput {
    success: bool,
    count: usize,
    repositories: Vec<Repository>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl SearchOutput {
    /// `suggest` is only called when `repositories` is empty.
    pub fn new<F>(repositories: Vec<Repository>, suggest: F) -> Self
    where
        F: FnOnce() -> Vec<String>,
    {
        let (suggestions, message) = if repositories.is_empty() {
            (Some(suggest()), Some(NO_RESULTS_MESSAGE.to_string()))
        } else {
            (None, None)
        };
        Self {
            success: true,
            count: repositories.len(),
            repositories,
            suggestions,
            message,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn suggestions(&self) -> Option<&[String]> {
        self.suggestions.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Failure envelope, written to stderr.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FailureOutput {
    success: bool,
    pub error: String,
    pub error_type: ErrorType,
}

impl From<&SearchError> for FailureOutput {
    fn from(err: &SearchError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
            error_type: err.error_type(),
        }
    }
}

/// The single document the tool emits.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Envelope {
    Success(SearchOutput),
    Failure(FailureOutput),
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }
}

impl From<crate::error::Result<SearchOutput>> for Envelope {
    fn from(result: crate::error::Result<SearchOutput>) -> Self {
        match result {
            Ok(output) => Envelope::Success(output),
            Err(err) => Envelope::Failure(FailureOutput::from(&err)),
        }
    }
}
