use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderStatus};

pub struct UpdateOrderStatusParams {
    pub order_id: Uuid,
    pub status: OrderStatus,
}

#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    /// Moving an order to `Shipped` also sends a best-effort shipping
    /// update email; the email result never affects the outcome.
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError>;
}
