//! Text-table rendering of fetched repositories.

use tabled::{Table, Tabled};

use crate::models::Repository;

/// A rendered table row: repository name and its GitHub page URL.
#[derive(Tabled)]
pub struct RepositoryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl From<&Repository> for RepositoryRow {
    fn from(repository: &Repository) -> Self {
        Self {
            name: repository.name.clone(),
            url: repository.html_url.to_string(),
        }
    }
}

/// Render repositories as a text table.
pub fn render_table(repositories: &[Repository]) -> String {
    let rows: Vec<RepositoryRow> = repositories.iter().map(RepositoryRow::from).collect();
    Table::new(rows).to_string()
}
