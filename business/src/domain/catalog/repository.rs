use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::RawProduct;

/// Catalog persistence port: one fetch of the whole collection, raw.
/// Shaping and filtering belong to the reader, not the adapter.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<RawProduct>, RepositoryError>;
}
