use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Order, OrderStatus};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists the order and returns its id. Saving a second order that
    /// carries an already-stored idempotency key must return the id of the
    /// original order instead of writing a duplicate.
    async fn save(&self, order: &Order) -> Result<Uuid, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    async fn get_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
    /// Updates the status and returns the refreshed order.
    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<Order, RepositoryError>;
}
