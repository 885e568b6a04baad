//! CLI argument parsing and validation.

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::routes::ReposRoute;

/// Repository types accepted when scanning an organization.
pub const ORGANIZATION_REPOSITORY_TYPES: &[&str] =
    &["all", "forks", "member", "private", "public", "sources"];

/// Repository types accepted when scanning a named user.
pub const USER_REPOSITORY_TYPES: &[&str] = &["all", "member", "owner"];

/// Repository types accepted when scanning the authenticated user.
pub const SELF_REPOSITORY_TYPES: &[&str] = &["all", "private", "public"];

/// Scans GitHub repositories and renders them as a table.
#[derive(Parser, Debug)]
#[command(name = "github-scanner", about = "Scans GitHub repositories", version)]
pub struct Cli {
    /// The category of repositories to scan.
    #[arg(value_enum)]
    pub category: ScanCategory,

    /// The owner of the repositories to scan (organization name or username).
    ///
    /// Omitting the owner for the user category scans the authenticated
    /// user's own repositories, which requires an OAuth token.
    #[arg(default_value = "")]
    pub owner: String,

    /// The type of repository. May require authorization.
    #[arg(long = "type", default_value = "all")]
    pub repository_type: String,

    /// The OAuth token to use for searching repositories.
    #[arg(long = "oauth", env = "GITHUB_OAUTH_TOKEN", default_value = "")]
    pub oauth_token: String,

    /// The primary programming language of the repository.
    ///
    /// Use "NULL" to select repositories with no primary language.
    #[arg(long = "primary-language", default_value = "")]
    pub primary_language: String,

    /// The license type of the repositories (e.g. 'MIT License').
    /// Requires authorization. Use "NULL" to select unlicensed repositories.
    #[arg(long, default_value = "")]
    pub license: String,
}

/// Category of repositories.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanCategory {
    /// Repositories of an organization.
    #[value(alias = "org")]
    Organization,
    /// Repositories of a user (or of the authenticated user when no owner is
    /// given).
    User,
}

/// Validation failures for scan options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanOptionsError {
    /// The repository type is not valid for the chosen category.
    #[error("Invalid Repository Type: {value}")]
    InvalidRepositoryType { value: String },

    /// A token is required for this scan but none was supplied.
    #[error("Missing Authorization")]
    MissingAuthorization,

    /// The category requires an owner but none was supplied.
    #[error("Missing Repository Owner")]
    MissingOwner,
}

impl ScanOptionsError {
    /// An actionable hint for the user, where one exists.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            ScanOptionsError::MissingAuthorization => {
                Some("Use the '--oauth' flag and supply an access token")
            }
            ScanOptionsError::MissingOwner => {
                Some("Supply an owner name (organization or user) as the second argument")
            }
            ScanOptionsError::InvalidRepositoryType { .. } => None,
        }
    }
}

impl Cli {
    /// Validate option combinations clap cannot express on its own.
    ///
    /// The set of acceptable repository types depends on the category, and on
    /// whether a user scan targets a named user or the authenticated one.
    pub fn validate(&self) -> Result<(), ScanOptionsError> {
        let allowed_types = match self.category {
            ScanCategory::Organization => {
                if self.owner.is_empty() {
                    return Err(ScanOptionsError::MissingOwner);
                }
                ORGANIZATION_REPOSITORY_TYPES
            }
            ScanCategory::User => {
                if self.owner.is_empty() {
                    if self.oauth_token.is_empty() {
                        return Err(ScanOptionsError::MissingAuthorization);
                    }
                    SELF_REPOSITORY_TYPES
                } else {
                    USER_REPOSITORY_TYPES
                }
            }
        };

        if !allowed_types.contains(&self.repository_type.as_str()) {
            return Err(ScanOptionsError::InvalidRepositoryType {
                value: self.repository_type.clone(),
            });
        }

        Ok(())
    }

    /// The API route these options scan.
    pub fn route(&self) -> ReposRoute {
        match self.category {
            ScanCategory::Organization => ReposRoute::Organization(self.owner.clone()),
            ScanCategory::User if self.owner.is_empty() => ReposRoute::Authenticated,
            ScanCategory::User => ReposRoute::User(self.owner.clone()),
        }
    }

    /// Whether the fetch needs the license preview media type.
    pub fn needs_license(&self) -> bool {
        !self.license.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("github-scanner").chain(args.iter().copied()))
            .expect("Failed to parse args")
    }

    #[test]
    fn test_organization_scan_parses() {
        let cli = parse(&["organization", "ustwo", "--type", "sources"]);
        assert_eq!(cli.category, ScanCategory::Organization);
        assert_eq!(cli.owner, "ustwo");
        assert_eq!(cli.repository_type, "sources");
        assert!(cli.validate().is_ok());
        assert_eq!(cli.route(), ReposRoute::Organization("ustwo".to_string()));
    }

    #[test]
    fn test_organization_requires_owner() {
        let cli = parse(&["organization"]);
        assert_eq!(cli.validate(), Err(ScanOptionsError::MissingOwner));
    }

    #[test]
    fn test_user_scan_defaults() {
        let cli = parse(&["user", "octocat"]);
        assert_eq!(cli.repository_type, "all");
        assert!(cli.validate().is_ok());
        assert_eq!(cli.route(), ReposRoute::User("octocat".to_string()));
    }

    #[test]
    fn test_self_scan_requires_token() {
        let mut cli = parse(&["user"]);
        cli.oauth_token.clear(); // The env fallback may populate it.
        assert_eq!(cli.validate(), Err(ScanOptionsError::MissingAuthorization));
    }

    #[test]
    fn test_self_scan_with_token() {
        let mut cli = parse(&["user", "--type", "private"]);
        cli.oauth_token = "secret".to_string();
        assert!(cli.validate().is_ok());
        assert_eq!(cli.route(), ReposRoute::Authenticated);
    }

    #[test]
    fn test_type_validity_depends_on_category() {
        // forks is an organization-only type
        let cli = parse(&["user", "octocat", "--type", "forks"]);
        assert_eq!(
            cli.validate(),
            Err(ScanOptionsError::InvalidRepositoryType {
                value: "forks".to_string()
            })
        );

        let cli = parse(&["organization", "ustwo", "--type", "forks"]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_needs_license_follows_filter() {
        let cli = parse(&["organization", "ustwo", "--license", "MIT License"]);
        assert!(cli.needs_license());

        let cli = parse(&["organization", "ustwo"]);
        assert!(!cli.needs_license());
    }
}
