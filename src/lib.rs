//! # reposcout
//!
//! GitHub repository search built for tool-calling agents: one JSON document
//! in, one JSON envelope out.
//!
//! ## Pipeline
//!
//! - [`params`] parses the input into [`SearchParameters`]
//! - [`query`] renders the provider query string
//! - [`github`] issues the single search request (and one README request per hit)
//! - [`normalize`] maps hits onto [`Repository`], with [`readme`] as best-effort enrichment
//! - [`suggest`] proposes alternative searches when nothing matched
//! - [`search`] sequences the above and builds the [`Envelope`]
//!
//! Everything runs sequentially on a blocking client. README failures are
//! never fatal; every other failure becomes a typed [`SearchError`].

pub mod commands;
pub mod config;
pub mod error;
pub mod github;
pub mod normalize;
pub mod params;
pub mod query;
pub mod readme;
pub mod search;
pub mod suggest;
pub mod token;
pub mod types;

pub use config::ToolConfig;
pub use error::{ErrorType, ReadmeError, Result, SearchError};
pub use github::{GitHubApi, GitHubClient, SearchRequest};
pub use types::{Envelope, Repository, SearchOutput, SearchParameters, SortBy};
