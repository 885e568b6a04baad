//! Repository fetching and filtering.
//!
//! Composes the routes, request transformers, and pagination engine into the
//! operations the CLI consumes: fetch every page of a repository listing and
//! apply pure post-fetch filters over the result.

use std::collections::BTreeMap;

use crate::client::GitHubClient;
use crate::error::{Result, ScannerError};
use crate::models::Repository;
use crate::pagination::{self, PageQuery};
use crate::routes::ReposRoute;

/// Media type for the stable v3 API.
pub const STABLE_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Preview media type that adds license metadata to repository records.
pub const LICENSE_PREVIEW_MEDIA_TYPE: &str = "application/vnd.github.drax-preview+json";

const REPOSITORY_TYPE_PARAMETER: &str = "type";
const NULL_OPTION: &str = "NULL";

/// Repository listing operations against a [`GitHubClient`].
#[derive(Debug, Clone)]
pub struct RepositoriesApi {
    client: GitHubClient,
    max_pages: Option<u32>,
}

impl RepositoriesApi {
    pub fn new(client: GitHubClient) -> Self {
        Self {
            client,
            max_pages: None,
        }
    }

    /// Cap the number of pages fetched per invocation.
    ///
    /// Off by default; the server's `next` links are trusted to terminate.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Fetch every repository the route lists, following pagination to
    /// exhaustion.
    ///
    /// `repository_type` is passed through as the `type` query parameter on
    /// every page. When `needs_license` is set the request asks for the
    /// license preview media type so records carry their license info.
    ///
    /// # Errors
    ///
    /// Any page failing aborts the fetch and returns that page's error; there
    /// is no partial result.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(
        &self,
        route: &ReposRoute,
        repository_type: &str,
        needs_license: bool,
    ) -> Result<Vec<Repository>> {
        let start_url = route.url(self.client.base_url())?;

        let parameters = BTreeMap::from([(
            REPOSITORY_TYPE_PARAMETER.to_string(),
            repository_type.to_string(),
        )]);
        let accept = if needs_license {
            LICENSE_PREVIEW_MEDIA_TYPE
        } else {
            STABLE_MEDIA_TYPE
        };
        let query = PageQuery {
            accept,
            parameters: &parameters,
            oauth_token: self.client.token(),
        };

        let repositories =
            pagination::fetch_all(self.client.transport(), start_url, &query, self.max_pages)
                .await?;

        tracing::debug!(count = repositories.len(), "fetch complete");

        Ok(repositories)
    }

    /// Blocking variant of [`fetch`](Self::fetch) for synchronous callers.
    ///
    /// Must not be called from within an async context.
    pub fn fetch_blocking(
        &self,
        route: &ReposRoute,
        repository_type: &str,
        needs_license: bool,
    ) -> Result<Vec<Repository>> {
        pagination::block_on(self.fetch(route, repository_type, needs_license))
            .map_err(ScannerError::Network)?
    }
}

/// Keep only repositories whose primary language matches the filter.
///
/// An empty filter is the identity. The sentinel `"NULL"` (any case) selects
/// repositories with no primary language at all.
pub fn filter_by_primary_language(
    repositories: Vec<Repository>,
    primary_language: &str,
) -> Vec<Repository> {
    if primary_language.is_empty() {
        return repositories;
    }

    if primary_language.eq_ignore_ascii_case(NULL_OPTION) {
        repositories
            .into_iter()
            .filter(|repository| repository.primary_language.is_none())
            .collect()
    } else {
        repositories
            .into_iter()
            .filter(|repository| repository.primary_language.as_deref() == Some(primary_language))
            .collect()
    }
}

/// Keep only repositories whose license display name matches the filter.
///
/// An empty filter is the identity. The sentinel `"NULL"` (any case) selects
/// repositories without license info, or whose license info carries no name.
pub fn filter_by_license(repositories: Vec<Repository>, license: &str) -> Vec<Repository> {
    if license.is_empty() {
        return repositories;
    }

    if license.eq_ignore_ascii_case(NULL_OPTION) {
        repositories
            .into_iter()
            .filter(|repository| {
                repository
                    .license_info
                    .as_ref()
                    .is_none_or(|info| info.name.is_none())
            })
            .collect()
    } else {
        repositories
            .into_iter()
            .filter(|repository| {
                repository
                    .license_info
                    .as_ref()
                    .is_some_and(|info| info.name.as_deref() == Some(license))
            })
            .collect()
    }
}
