//! GitHub repository scanner.
//!
//! Fetches repository metadata from the GitHub REST API, following
//! cursor-style `Link` pagination until exhaustion, and exposes the result as
//! a single ordered collection with pure filter transforms layered on top.
//!
//! # Quick Start
//!
//! ```no_run
//! use github_scanner::{GitHubClient, ReposRoute, RepositoriesApi};
//!
//! #[tokio::main]
//! async fn main() -> github_scanner::Result<()> {
//!     let client = GitHubClient::from_env()?;
//!     let api = RepositoriesApi::new(client);
//!
//!     let route = ReposRoute::Organization("ustwo".to_string());
//!     let repositories = api.fetch(&route, "public", false).await?;
//!     println!("Found {} repositories", repositories.len());
//!
//!     let rust_only = github_scanner::filter_by_primary_language(repositories, "Rust");
//!     println!("{} written in Rust", rust_only.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The fetch pipeline is built leaf-first:
//!
//! - `models` — typed records decoded from response bodies
//! - `link_header` — `Link` header relation parsing
//! - `request` — composable request transformers
//! - `response` — validation and error classification
//! - `pagination` — the page-following fetch loop over an injected
//!   [`Transport`]
//!
//! [`RepositoriesApi`] composes all of the above for the repository listing
//! endpoints; the binary in `src/bin/github-scanner.rs` adds argument
//! validation, sorting, and table rendering.
//!
//! # Configuration
//!
//! [`GitHubClient::from_env`] reads:
//!
//! - `GITHUB_OAUTH_TOKEN` (optional) — OAuth token for authenticated requests
//! - `GITHUB_API_URL` (optional) — base URL (defaults to `https://api.github.com`)

pub mod cli;
mod client;
mod error;
mod link_header;
mod models;
mod output;
mod pagination;
mod repos;
mod request;
mod response;
mod routes;
mod transport;

// Re-export core types
pub use client::{GitHubClient, DEFAULT_API_URL};
pub use error::{NetworkError, Result, ScannerError};
pub use link_header::LinkRelations;
pub use models::{LicenseInfo, Repository};
pub use pagination::{block_on, fetch_all, PageQuery};
pub use repos::{
    filter_by_license, filter_by_primary_language, RepositoriesApi, LICENSE_PREVIEW_MEDIA_TYPE,
    STABLE_MEDIA_TYPE,
};
pub use response::{validate, ValidatedResponse};
pub use routes::ReposRoute;
pub use transport::{HttpTransport, ResponseParts, Transport, TransportOutcome};

// Re-export transformers for callers assembling their own requests
pub use output::{render_table, RepositoryRow};
pub use request::{authorize, encode_url_parameters, escape, set_accept_header};
