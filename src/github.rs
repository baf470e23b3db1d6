//! GitHub REST transport.
//!
//! [`GitHubApi`] is the seam between the search pipeline and the network.
//! [`GitHubClient`] implements it with a blocking [`reqwest`] client that is
//! created per invocation and dropped with it.

use crate::config::ToolConfig;
use crate::error::{ReadmeError, Result, SearchError};
use crate::types::{GitHubSearchResponse, ReadmeResponse, SortBy};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

const API_VERSION: &str = "2022-11-28";

/// One page of a repository search, always sorted descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub sort: SortBy,
    pub per_page: u8,
}

impl SearchRequest {
    pub const ORDER: &'static str = "desc";
}

/// Remote operations the search pipeline depends on.
pub trait GitHubApi {
    /// Runs a repository search.
    ///
    /// # Errors
    ///
    /// [`SearchError::Api`] for a transport failure or non-success status,
    /// [`SearchError::Unexpected`] for a body that is not a search response.
    fn search_repositories(&self, request: &SearchRequest) -> Result<GitHubSearchResponse>;

    /// Fetches the README resource for `full_name` (`owner/repo`).
    ///
    /// Returns `Ok(None)` when the repository has no README.
    fn readme(&self, full_name: &str) -> std::result::Result<Option<ReadmeResponse>, ReadmeError>;
}

impl<T: GitHubApi + ?Sized> GitHubApi for &T {
    fn search_repositories(&self, request: &SearchRequest) -> Result<GitHubSearchResponse> {
        (**self).search_repositories(request)
    }

    fn readme(&self, full_name: &str) -> std::result::Result<Option<ReadmeResponse>, ReadmeError> {
        (**self).readme(full_name)
    }
}

pub struct GitHubClient {
    http: reqwest::blocking::Client,
    api_base: String,
}

impl GitHubClient {
    /// Builds a client from `config`, sending `token` as a bearer credential
    /// when present.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Unexpected`] if the token is not a valid header
    /// value or the HTTP client cannot be constructed.
    pub fn new(config: &ToolConfig, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                SearchError::Unexpected("GitHub token contains invalid characters".into())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SearchError::Unexpected(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_base: config.api_base().to_string(),
        })
    }

    pub fn search_url(&self, request: &SearchRequest) -> String {
        format!(
            "{}/search/repositories?q={}&sort={}&order={}&per_page={}",
            self.api_base,
            urlencoding::encode(&request.query),
            request.sort.as_str(),
            SearchRequest::ORDER,
            request.per_page
        )
    }

    pub fn readme_url(&self, full_name: &str) -> String {
        format!("{}/repos/{}/readme", self.api_base, full_name)
    }
}

impl GitHubApi for GitHubClient {
    fn search_repositories(&self, request: &SearchRequest) -> Result<GitHubSearchResponse> {
        let url = self.search_url(request);
        debug!(
            query = %request.query,
            sort = request.sort.as_str(),
            per_page = request.per_page,
            "searching repositories"
        );

        let resp = self
            .http
            .get(&url)
            .send()
            .map_err(|e| SearchError::Api(format!("Request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(SearchError::Api(format!(
                "GitHub API error: {} - {}",
                status.as_u16(),
                body
            )));
        }

        resp.json::<GitHubSearchResponse>().map_err(|e| {
            if e.is_decode() {
                SearchError::Unexpected(format!("malformed search response: {e}"))
            } else {
                SearchError::Api(format!("Request failed: {e}"))
            }
        })
    }

    fn readme(&self, full_name: &str) -> std::result::Result<Option<ReadmeResponse>, ReadmeError> {
        debug!(repo = full_name, "fetching README");
        let resp = self
            .http
            .get(self.readme_url(full_name))
            .send()
            .map_err(|e| ReadmeError::Transport(e.to_string()))?;

        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if !status.is_success() => Err(ReadmeError::Status(status.as_u16())),
            _ => resp.json::<ReadmeResponse>().map(Some).map_err(|e| {
                if e.is_decode() {
                    ReadmeError::Shape(e.to_string())
                } else {
                    ReadmeError::Transport(e.to_string())
                }
            }),
        }
    }
}

/// In-memory [`GitHubApi`] for unit tests.
#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use crate::types::GitHubRepo;
    use std::cell::RefCell;
    use std::collections::HashMap;

    pub enum ReadmeReply {
        /// Raw base64 `content` as the provider would send it.
        Content(String),
        NotFound,
        Status(u16),
        Transport,
    }

    #[derive(Default)]
    pub struct FakeApi {
        pub items: Vec<GitHubRepo>,
        pub search_failure: Option<String>,
        pub readmes: HashMap<String, ReadmeReply>,
        pub requests: RefCell<Vec<SearchRequest>>,
        pub readme_calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        pub fn with_items(items: Vec<GitHubRepo>) -> Self {
            Self {
                items,
                ..Default::default()
            }
        }

        pub fn with_readme(mut self, full_name: &str, reply: ReadmeReply) -> Self {
            self.readmes.insert(full_name.to_string(), reply);
            self
        }
    }

    impl GitHubApi for FakeApi {
        fn search_repositories(&self, request: &SearchRequest) -> Result<GitHubSearchResponse> {
            self.requests.borrow_mut().push(request.clone());
            match &self.search_failure {
                Some(msg) => Err(SearchError::Api(msg.clone())),
                None => Ok(GitHubSearchResponse {
                    items: self.items.clone(),
                }),
            }
        }

        fn readme(
            &self,
            full_name: &str,
        ) -> std::result::Result<Option<ReadmeResponse>, ReadmeError> {
            self.readme_calls.borrow_mut().push(full_name.to_string());
            match self.readmes.get(full_name) {
                Some(ReadmeReply::Content(content)) => Ok(Some(ReadmeResponse {
                    content: Some(content.clone()),
                })),
                Some(ReadmeReply::NotFound) | None => Ok(None),
                Some(ReadmeReply::Status(code)) => Err(ReadmeError::Status(*code)),
                Some(ReadmeReply::Transport) => {
                    Err(ReadmeError::Transport("connection reset".into()))
                }
            }
        }
    }

    pub fn raw_repo(full_name: &str) -> GitHubRepo {
        let name = full_name.rsplit('/').next().unwrap_or(full_name).to_string();
        GitHubRepo {
            name,
            full_name: full_name.to_string(),
            html_url: format!("https://github.com/{full_name}"),
            description: Some(format!("{full_name} description")),
            stargazers_count: 1200,
            forks_count: 80,
            open_issues_count: 7,
            language: Some("Rust".into()),
            topics: vec!["cli".into(), "search".into()],
            created_at: "2019-05-01T10:00:00Z".into(),
            updated_at: "2024-03-01T10:00:00Z".into(),
            pushed_at: "2024-02-28T10:00:00Z".into(),
            license: None,
        }
    }
}
