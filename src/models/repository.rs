//! Repository model.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// A GitHub repository.
///
/// Constructed only by decoding an API response; a record missing any of its
/// required fields fails decoding as a whole rather than producing a partial
/// value. Immutable once constructed — filtering and sorting build new
/// collections, they never mutate records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repository {
    /// GitHub identifier for the repository.
    pub id: u64,

    /// URL of the repository's GitHub page. User friendly.
    pub html_url: Url,

    /// Name of the repository.
    pub name: String,

    /// Primary programming language of the repository, if there is one.
    #[serde(default, rename = "language")]
    pub primary_language: Option<String>,

    /// Open-source license info for the repository, if it exists.
    ///
    /// Only populated when the request asked for the license preview media
    /// type; the stable API shape omits it.
    #[serde(default, rename = "license")]
    pub license_info: Option<LicenseInfo>,
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Open-source license info for a repository.
///
/// Equality is structural across all three optional fields; two absent fields
/// compare equal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LicenseInfo {
    /// Key name for the license. Used for GitHub searches and URI creation.
    #[serde(default)]
    pub key: Option<String>,

    /// User friendly name for the license.
    #[serde(default)]
    pub name: Option<String>,

    /// URL to the canonical copy of the license (not necessarily located in
    /// the repository).
    #[serde(default)]
    pub url: Option<Url>,
}
