//! Error types for GitHub API operations.

use thiserror::Error;

/// Errors produced while fetching from the GitHub API.
///
/// This is a closed taxonomy: every failure the fetch engine can surface maps
/// onto exactly one of these variants. Transport-level failures with no usable
/// response collapse into [`NetworkError::Unknown`], which carries an opaque
/// description of the underlying cause when one is available.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// A response was returned with a status code outside the 200 series
    /// that is not otherwise classified.
    #[error("Failed Request. Status Code: {status}")]
    FailedRequest { status: u16 },

    /// The response body could not be decoded into the expected shape.
    #[error("Invalid JSON returned from the server")]
    InvalidJson,

    /// The request was denied because the rate limit has been exhausted.
    #[error("Exceeded rate limit for requests")]
    RateLimited,

    /// The request lacked sufficient authorization.
    #[error("Not authorized")]
    Unauthorized,

    /// A transport-level failure: no response arrived, or it arrived without
    /// a body.
    #[error("{}", unknown_description(.cause))]
    Unknown { cause: Option<String> },
}

fn unknown_description(cause: &Option<String>) -> String {
    match cause {
        Some(cause) => format!("Unknown Error: {cause}"),
        None => "Unknown Error".to_string(),
    }
}

impl NetworkError {
    /// Wrap an arbitrary error as the unknown variant, keeping only its
    /// description.
    pub fn unknown<E: std::fmt::Display>(cause: E) -> Self {
        NetworkError::Unknown {
            cause: Some(cause.to_string()),
        }
    }

    /// An actionable hint for the user, where one exists.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            NetworkError::RateLimited | NetworkError::Unauthorized => {
                Some("Use the '--oauth' flag and supply an access token")
            }
            NetworkError::FailedRequest { .. }
            | NetworkError::InvalidJson
            | NetworkError::Unknown { .. } => None,
        }
    }
}

/// Top-level error exposed by the scanner binary.
///
/// Distinguishes failures originating in this crate's own fetch engine and
/// option handling from opaque external ones (URL parsing, HTTP client
/// construction).
#[derive(Debug, Error)]
pub enum ScannerError {
    /// A failure from the fetch engine.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Command-line options failed validation.
    #[error(transparent)]
    Options(#[from] crate::cli::ScanOptionsError),

    /// A URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ScannerError {
    /// An actionable hint for the user, where one exists.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            ScannerError::Network(err) => err.recovery_suggestion(),
            ScannerError::Options(err) => err.recovery_suggestion(),
            ScannerError::Url(_) | ScannerError::Http(_) => None,
        }
    }
}

/// Result type alias for scanner operations.
pub type Result<T, E = ScannerError> = core::result::Result<T, E>;
