use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::CartItem;
use business::domain::checkout::model::{PaymentMethod, ShippingDetails};
use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderStatus};
use business::domain::shared::value_objects::UserId;

/// Order rows carry the cart snapshot and the shipping block as JSONB so
/// that a historical order survives later catalog edits untouched.
#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub order_number: String,
    pub idempotency_key: Uuid,
    pub user_id: String,
    pub items: serde_json::Value,
    pub subtotal: f64,
    pub total: f64,
    pub shipping_address: serde_json::Value,
    pub payment_method: String,
    pub payment_id: Option<String>,
    pub gateway_order_id: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Result<Order, RepositoryError> {
        let items: Vec<CartItem> =
            serde_json::from_value(self.items).map_err(|_| RepositoryError::Persistence)?;
        let shipping_address: ShippingDetails = serde_json::from_value(self.shipping_address)
            .map_err(|_| RepositoryError::Persistence)?;
        // A value outside the known enum sets means the row is corrupt,
        // the same failure class as an undecodable JSONB column.
        let payment_method = self
            .payment_method
            .parse::<PaymentMethod>()
            .map_err(|_| RepositoryError::Persistence)?;
        let status = self
            .status
            .parse::<OrderStatus>()
            .map_err(|_| RepositoryError::Persistence)?;

        Ok(Order::from_repository(
            self.id,
            self.order_number,
            self.idempotency_key,
            UserId::new(&self.user_id),
            items,
            self.subtotal,
            self.total,
            shipping_address,
            payment_method,
            self.payment_id,
            self.gateway_order_id,
            status,
            self.created_at,
            self.updated_at,
        ))
    }
}
