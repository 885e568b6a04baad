//! HTTP transport seam.
//!
//! The pagination engine never talks to the network directly; it goes through
//! the [`Transport`] trait so that tests can script page sequences and callers
//! can inject their own client.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Request, StatusCode};

/// Status line and headers of a received response.
#[derive(Debug, Clone)]
pub struct ResponseParts {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// The raw outcome of a single dispatched request.
///
/// Exactly one outcome is produced per request. A transport failure before
/// any response arrives leaves `response` and `body` empty; a failure while
/// reading the body leaves only `body` empty. Classification into the error
/// taxonomy happens later, in [`crate::response::validate`].
#[derive(Debug, Default)]
pub struct TransportOutcome {
    pub body: Option<Vec<u8>>,
    pub response: Option<ResponseParts>,
    pub error: Option<String>,
}

/// A single-shot request/response primitive.
///
/// Implementations must resolve every call with exactly one
/// [`TransportOutcome`]; the engine does not re-verify this.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Dispatch the request and wait for its single outcome.
    async fn execute(&self, request: Request) -> TransportOutcome;
}

/// [`Transport`] backed by a shared `reqwest` connection pool.
///
/// Stateless with respect to any one in-flight request; a single instance may
/// serve concurrent independent fetches without external locking.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> TransportOutcome {
        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                return TransportOutcome {
                    error: Some(err.to_string()),
                    ..Default::default()
                };
            }
        };

        let parts = ResponseParts {
            status: response.status(),
            headers: response.headers().clone(),
        };

        match response.bytes().await {
            Ok(body) => TransportOutcome {
                body: Some(body.to_vec()),
                response: Some(parts),
                error: None,
            },
            Err(err) => TransportOutcome {
                body: None,
                response: Some(parts),
                error: Some(err.to_string()),
            },
        }
    }
}
