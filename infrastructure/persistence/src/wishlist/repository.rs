use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::wishlist::model::WishlistItem;
use business::domain::wishlist::repository::WishlistRepository;

/// Wishlists live in a small key-value table, one JSONB document per
/// user. Every save rewrites the whole list under its key.
pub struct WishlistRepositoryPostgres {
    pool: PgPool,
}

impl WishlistRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn key_for(user_id: &UserId) -> String {
        format!("wishlist_{}", user_id.as_str())
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryPostgres {
    async fn load(&self, user_id: &UserId) -> Result<Vec<WishlistItem>, RepositoryError> {
        let row: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT value FROM kv_entries WHERE key = $1")
                .bind(Self::key_for(user_id))
                .fetch_optional(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        match row {
            Some((value,)) => {
                serde_json::from_value(value).map_err(|_| RepositoryError::Persistence)
            }
            // A user with no stored key simply has an empty wishlist.
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, user_id: &UserId, items: &[WishlistItem]) -> Result<(), RepositoryError> {
        let value = serde_json::to_value(items).map_err(|_| RepositoryError::Persistence)?;

        sqlx::query(
            r#"INSERT INTO kv_entries (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(Self::key_for(user_id))
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn clear(&self, user_id: &UserId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM kv_entries WHERE key = $1")
            .bind(Self::key_for(user_id))
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
