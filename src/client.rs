//! GitHub API client.
//!
//! Holds the injected transport, base URL, and optional OAuth token. The
//! fetch and filter operations live in [`crate::repos`].

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::Result;
use crate::transport::{HttpTransport, Transport};

/// Base URL used when `GITHUB_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("github-scanner/", env!("CARGO_PKG_VERSION"));

/// Client for the GitHub REST API.
///
/// Constructed explicitly and passed to the operations that need it; there is
/// no process-wide shared instance. Cheaply cloneable; clones reference the
/// same underlying transport.
///
/// # Example
///
/// ```no_run
/// use github_scanner::GitHubClient;
///
/// # fn example() -> github_scanner::Result<()> {
/// // Create from environment variables
/// let client = GitHubClient::from_env()?;
///
/// // Or configure manually
/// let client = GitHubClient::new(Some("my-oauth-token"), "https://api.github.com")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GitHubClient {
    transport: Arc<dyn Transport>,
    base_url: Arc<Url>,
    token: Option<String>,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a client from environment variables.
    ///
    /// Uses `GITHUB_OAUTH_TOKEN` for authentication when set (requests go out
    /// unauthenticated otherwise) and `GITHUB_API_URL` for the base URL
    /// (defaults to `https://api.github.com`).
    pub fn from_env() -> Result<Self> {
        let token = env::var("GITHUB_OAUTH_TOKEN").ok();
        let base_url = env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(token.as_deref(), &base_url)
    }

    /// Create a new client.
    ///
    /// An empty token is treated the same as no token at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be constructed.
    pub fn new(token: Option<&str>, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with / so that joins keep the full path
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()?;

        Ok(Self {
            transport: Arc::new(HttpTransport::new(http)),
            base_url: Arc::new(base_url),
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
        })
    }

    /// Replace the transport, e.g. with a scripted one in tests.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the OAuth token, if one is configured.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}
