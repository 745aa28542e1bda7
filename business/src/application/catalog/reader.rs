use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::read_catalog::ReadCatalogUseCase;
use crate::domain::logger::Logger;

/// Holds the last normalized, active-only product list. `refetch` replaces
/// it wholesale; a failed fetch leaves the previous list in place.
pub struct CatalogReader {
    repository: Arc<dyn CatalogRepository>,
    logger: Arc<dyn Logger>,
    held: RwLock<Vec<Product>>,
}

impl CatalogReader {
    pub fn new(repository: Arc<dyn CatalogRepository>, logger: Arc<dyn Logger>) -> Self {
        Self {
            repository,
            logger,
            held: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ReadCatalogUseCase for CatalogReader {
    async fn products(&self) -> Vec<Product> {
        self.held.read().await.clone()
    }

    async fn refetch(&self) -> Result<Vec<Product>, CatalogError> {
        let raw = self.repository.fetch_all().await?;
        let products: Vec<Product> = raw
            .into_iter()
            .map(Product::from_raw)
            .filter(|product| product.is_active)
            .collect();

        self.logger
            .info(&format!("Catalog refreshed: {} active products", products.len()));

        let mut held = self.held.write().await;
        *held = products.clone();
        Ok(products)
    }
}
