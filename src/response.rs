//! Response validation and error classification.
//!
//! Maps the raw transport outcome onto either a validated body or one branch
//! of the [`NetworkError`] taxonomy.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::error::NetworkError;
use crate::transport::TransportOutcome;

const RATE_LIMIT_REMAINING_HEADER: &str = "X-RateLimit-Remaining";

/// A response that passed validation: a 2xx status with a body present.
#[derive(Debug)]
pub struct ValidatedResponse {
    pub body: Vec<u8>,
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// Validate a transport outcome.
///
/// A missing response or missing body classifies as [`NetworkError::Unknown`],
/// carrying the transport error's description when there is one. Non-2xx
/// statuses are classified in order: rate limiting first (401/403 with an
/// exhausted `X-RateLimit-Remaining` quota), then plain 401 as
/// [`NetworkError::Unauthorized`], then everything else as
/// [`NetworkError::FailedRequest`]. A 401 can originate from either cause, so
/// the rate-limit check must run before the generic 401 branch.
pub fn validate(outcome: TransportOutcome) -> Result<ValidatedResponse, NetworkError> {
    let (body, parts) = match (outcome.body, outcome.response) {
        (Some(body), Some(parts)) => (body, parts),
        _ => {
            return Err(NetworkError::Unknown {
                cause: outcome.error,
            });
        }
    };

    if !parts.status.is_success() {
        return Err(classify_failure(parts.status, &parts.headers));
    }

    Ok(ValidatedResponse {
        body,
        status: parts.status,
        headers: parts.headers,
    })
}

fn classify_failure(status: StatusCode, headers: &HeaderMap) -> NetworkError {
    let auth_status = status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN;
    if auth_status && rate_limit_exhausted(headers) {
        return NetworkError::RateLimited;
    }

    if status == StatusCode::UNAUTHORIZED {
        return NetworkError::Unauthorized;
    }

    NetworkError::FailedRequest {
        status: status.as_u16(),
    }
}

fn rate_limit_exhausted(headers: &HeaderMap) -> bool {
    headers
        .get(RATE_LIMIT_REMAINING_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<i64>().ok())
        == Some(0)
}
