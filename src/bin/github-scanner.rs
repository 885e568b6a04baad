//! GitHub scanner binary.
//!
//! Scans the repositories of an organization or user, filters them by
//! primary language and license, and prints the result as a text table.
//!
//! The binary itself is a synchronous caller: each fetch drives the async
//! transport to completion through the crate's blocking bridge.

use std::process::ExitCode;

use clap::Parser;
use github_scanner::cli::Cli;
use github_scanner::{
    filter_by_license, filter_by_primary_language, GitHubClient, RepositoriesApi, ScannerError,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            if let Some(suggestion) = err.recovery_suggestion() {
                eprintln!("Hint: {suggestion}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ScannerError> {
    cli.validate()?;

    let token = (!cli.oauth_token.is_empty()).then_some(cli.oauth_token.as_str());
    let base_url = std::env::var("GITHUB_API_URL")
        .unwrap_or_else(|_| github_scanner::DEFAULT_API_URL.to_string());
    let client = GitHubClient::new(token, &base_url)?;
    let api = RepositoriesApi::new(client);

    // Fetch
    let repositories =
        api.fetch_blocking(&cli.route(), &cli.repository_type, cli.needs_license())?;

    // Filter
    let repositories = filter_by_primary_language(repositories, &cli.primary_language);
    let mut repositories = filter_by_license(repositories, &cli.license);

    // Sort
    repositories.sort_by(|a, b| a.name.cmp(&b.name));

    // Render
    println!("{}", github_scanner::render_table(&repositories));

    Ok(())
}
