use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;

/// The catalog reader: a single fetch-normalize-filter pass with a held
/// result list. Not a cache and not a query planner.
#[async_trait]
pub trait ReadCatalogUseCase: Send + Sync {
    /// The currently held active-product list.
    async fn products(&self) -> Vec<Product>;

    /// Repeats the fetch-normalize-filter pipeline and replaces the held
    /// list wholesale; no incremental diffing.
    async fn refetch(&self) -> Result<Vec<Product>, CatalogError>;
}
