//! GitHub API endpoint routes.

use url::Url;

use crate::error::Result;

/// A repository listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReposRoute {
    /// Repositories belonging to an organization.
    Organization(String),
    /// Repositories belonging to a named user.
    User(String),
    /// Repositories of the authenticated user.
    Authenticated,
}

impl ReposRoute {
    /// Resolve the route against an API base URL.
    pub fn url(&self, base_url: &Url) -> Result<Url> {
        Ok(base_url.join(&self.path())?)
    }

    fn path(&self) -> String {
        match self {
            ReposRoute::Organization(organization) => format!("orgs/{organization}/repos"),
            ReposRoute::User(user) => format!("users/{user}/repos"),
            ReposRoute::Authenticated => "user/repos".to_string(),
        }
    }
}
