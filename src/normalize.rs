//! Mapping of provider search hits onto [`Repository`].

use crate::github::GitHubApi;
use crate::readme::fetch_readme;
use crate::types::{GitHubRepo, Repository};

/// Converts a raw search hit, fetching its README when `include_readme` is set.
///
/// README retrieval is best-effort and cannot fail this call.
pub fn normalize<A: GitHubApi + ?Sized>(
    raw: &GitHubRepo,
    include_readme: bool,
    api: &A,
) -> Repository {
    let readme_content = if include_readme {
        fetch_readme(api, &raw.full_name)
    } else {
        None
    };

    Repository {
        name: raw.name.clone(),
        full_name: raw.full_name.clone(),
        description: raw.description.clone(),
        url: raw.html_url.clone(),
        stars: raw.stargazers_count,
        forks: raw.forks_count,
        language: raw.language.clone(),
        topics: raw.topics.clone(),
        created_at: raw.created_at.clone(),
        updated_at: raw.updated_at.clone(),
        pushed_at: raw.pushed_at.clone(),
        open_issues: raw.open_issues_count,
        license: raw.license.as_ref().and_then(|l| l.spdx_id.clone()),
        readme_content,
    }
}
