//! The paginated fetch engine.
//!
//! Issues one GET request per page, follows the `next` link relation until
//! the server stops providing one, and accumulates the decoded records in
//! page order. Pages are fetched strictly sequentially: page N+1 is never
//! requested before page N's outcome is fully resolved, and a failure on any
//! page aborts the whole fetch with that page's error. There is no partial
//! accumulation, no retry, and no caching.

use std::collections::BTreeMap;
use std::future::Future;

use reqwest::{Method, Request};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::NetworkError;
use crate::link_header::LinkRelations;
use crate::request;
use crate::response;
use crate::transport::Transport;

/// Per-page request configuration, applied identically to every page of one
/// fetch invocation.
#[derive(Debug, Clone)]
pub struct PageQuery<'a> {
    /// Media type for the `Accept` header.
    pub accept: &'a str,
    /// Query parameters merged into each page URL.
    pub parameters: &'a BTreeMap<String, String>,
    /// OAuth token; `None` sends unauthenticated requests.
    pub oauth_token: Option<&'a str>,
}

/// Fetch every page starting from `start_url` and return the concatenated
/// records.
///
/// Result ordering is page-arrival order, then within-page array order.
/// Termination relies on the server eventually omitting the `next` relation;
/// `max_pages` adds an optional ceiling against a misbehaving server that
/// keeps linking onward. Reaching the ceiling logs a warning and returns what
/// has been accumulated so far.
pub async fn fetch_all<T: DeserializeOwned>(
    transport: &dyn Transport,
    start_url: Url,
    query: &PageQuery<'_>,
    max_pages: Option<u32>,
) -> Result<Vec<T>, NetworkError> {
    let mut accumulated = Vec::new();
    let mut next_url = Some(start_url);
    let mut pages_fetched: u32 = 0;

    while let Some(url) = next_url.take() {
        if max_pages.is_some_and(|limit| pages_fetched >= limit) {
            tracing::warn!(
                limit = max_pages.unwrap_or(0),
                "reached pagination ceiling, stopping"
            );
            break;
        }

        let mut page_request = Request::new(Method::GET, url);
        request::set_accept_header(&mut page_request, query.accept);
        request::encode_url_parameters(&mut page_request, query.parameters);
        request::authorize(&mut page_request, query.oauth_token);

        tracing::debug!(url = %page_request.url(), page = pages_fetched + 1, "fetching page");

        // The await is the single-completion handoff: the engine suspends
        // here until exactly one outcome arrives for this page.
        let outcome = transport.execute(page_request).await;
        let validated = response::validate(outcome)?;

        let items: Vec<T> =
            serde_json::from_slice(&validated.body).map_err(|_| NetworkError::InvalidJson)?;
        accumulated.extend(items);
        pages_fetched += 1;

        // An absent or unparseable next link terminates the fetch with what
        // has been accumulated.
        next_url = LinkRelations::from_headers(&validated.headers)
            .next_url()
            .and_then(|raw| Url::parse(raw).ok());
    }

    Ok(accumulated)
}

/// Drive a fetch future to completion from a synchronous caller.
///
/// Bridges the async transport to callers without a runtime of their own by
/// spinning up a current-thread runtime for the duration of the call. Must
/// not be called from within an async context.
pub fn block_on<F: Future>(future: F) -> Result<F::Output, NetworkError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(NetworkError::unknown)?;

    Ok(runtime.block_on(future))
}
