//! Search orchestration: query → remote search → normalize → envelope.

use crate::error::Result;
use crate::github::{GitHubApi, SearchRequest};
use crate::normalize::normalize;
use crate::params::parse_parameters;
use crate::query::build_query;
use crate::suggest::suggest;
use crate::types::{Repository, SearchOutput, SearchParameters};
use tracing::debug;

/// The single page request for `params`.
pub fn search_request(params: &SearchParameters) -> SearchRequest {
    SearchRequest {
        query: build_query(params),
        sort: params.sort_by,
        per_page: params.max_results.min(SearchParameters::MAX_RESULTS_CAP),
    }
}

/// Runs one search and normalizes every hit in provider order.
///
/// # Errors
///
/// Propagates the [`GitHubApi::search_repositories`] error. README failures
/// never surface here.
pub fn search<A: GitHubApi + ?Sized>(
    api: &A,
    params: &SearchParameters,
) -> Result<Vec<Repository>> {
    let request = search_request(params);
    let response = api.search_repositories(&request)?;
    debug!(hits = response.items.len(), "search complete");

    Ok(response
        .items
        .iter()
        .map(|item| normalize(item, params.include_readme, api))
        .collect())
}

/// Searches and assembles the success envelope, attaching suggestions when
/// nothing matched. `fallback_search` does not gate the suggestions.
pub fn run<A: GitHubApi + ?Sized>(api: &A, params: &SearchParameters) -> Result<SearchOutput> {
    let repositories = search(api, params)?;
    Ok(SearchOutput::new(repositories, || suggest(params)))
}

/// Parses `input`, then connects and runs the search.
///
/// `connect` is only invoked once the parameters are valid, so a validation
/// failure never touches the network.
pub fn execute<A, F>(input: &str, connect: F) -> Result<SearchOutput>
where
    A: GitHubApi,
    F: FnOnce() -> Result<A>,
{
    let params = parse_parameters(input)?;
    let api = connect()?;
    run(&api, &params)
}
