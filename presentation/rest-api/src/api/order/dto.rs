use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::order::model::Order;

use crate::api::cart::dto::CartItemResponse;

#[derive(Debug, Clone, Object)]
pub struct UpdateOrderStatusRequest {
    /// One of: pending, confirmed, shipped, delivered, cancelled
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderResponse {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<CartItemResponse>,
    /// Item total before tax, in rupees
    pub subtotal: f64,
    /// Grand total including tax, in rupees
    pub total: f64,
    /// Single-line delivery address
    pub shipping_address: String,
    pub payment_method: String,
    #[oai(skip_serializing_if_is_none)]
    pub payment_id: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            order_number: order.order_number,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            items: order.items.into_iter().map(|i| i.into()).collect(),
            subtotal: order.subtotal,
            total: order.total,
            shipping_address: order.shipping_address.formatted_address(),
            payment_method: order.payment_method.to_string(),
            payment_id: order.payment_id,
            status: order.status.to_string(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
