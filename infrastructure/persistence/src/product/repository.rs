use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::catalog::model::RawProduct;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;

use super::entity::ProductEntity;

pub struct CatalogRepositoryPostgres {
    pool: PgPool,
}

impl CatalogRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryPostgres {
    async fn fetch_all(&self) -> Result<Vec<RawProduct>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, discount_price, category, images, colors, sizes, stock_quantity, is_active, badge, rating, review_count, created_at, updated_at FROM products ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_raw()).collect())
    }
}
