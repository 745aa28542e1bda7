#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.fetch_failed")]
    Fetch(#[from] crate::domain::errors::RepositoryError),
}
