use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderStatus};
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::OrderEntity;

const ORDER_COLUMNS: &str = "id, order_number, idempotency_key, user_id, items, subtotal, total, shipping_address, payment_method, payment_id, gateway_order_id, status, created_at, updated_at";

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn save(&self, order: &Order) -> Result<Uuid, RepositoryError> {
        let items =
            serde_json::to_value(&order.items).map_err(|_| RepositoryError::Persistence)?;
        let shipping_address = serde_json::to_value(&order.shipping_address)
            .map_err(|_| RepositoryError::Persistence)?;

        // The unique idempotency key makes a retried save a no-op; the
        // follow-up select resolves to whichever insert won.
        sqlx::query(
            r#"INSERT INTO orders (id, order_number, idempotency_key, user_id, items, subtotal, total, shipping_address, payment_method, payment_id, gateway_order_id, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (idempotency_key) DO NOTHING"#,
        )
        .bind(order.id)
        .bind(&order.order_number)
        .bind(order.idempotency_key)
        .bind(order.user_id.as_str())
        .bind(items)
        .bind(order.subtotal)
        .bind(order.total)
        .bind(shipping_address)
        .bind(order.payment_method.to_string())
        .bind(&order.payment_id)
        .bind(&order.gateway_order_id)
        .bind(order.status.to_string())
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let (id,): (Uuid,) =
            sqlx::query_as("SELECT id FROM orders WHERE idempotency_key = $1")
                .bind(order.idempotency_key)
                .fetch_one(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(id)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn get_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "UPDATE orders SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING {ORDER_COLUMNS}"
        ))
        .bind(id)
        .bind(status.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }
}
