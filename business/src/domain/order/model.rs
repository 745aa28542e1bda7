use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cart::model::CartItem;
use crate::domain::checkout::model::{PaymentMethod, ShippingDetails};
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Confirmed => write!(f, "confirmed"),
            OrderStatus::Shipped => write!(f, "shipped"),
            OrderStatus::Delivered => write!(f, "delivered"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

/// A recorded purchase: cart snapshot plus customer and payment metadata.
/// The idempotency key is generated once per checkout attempt so a retried
/// save cannot create a second order.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
    pub idempotency_key: Uuid,
    pub user_id: UserId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub items: Vec<CartItem>,
    pub subtotal: f64,
    pub total: f64,
    pub shipping_address: ShippingDetails,
    pub payment_method: PaymentMethod,
    pub payment_id: Option<String>,
    pub gateway_order_id: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewOrderProps {
    pub idempotency_key: Uuid,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub subtotal: f64,
    pub total: f64,
    pub shipping: ShippingDetails,
    pub payment_method: PaymentMethod,
    pub payment_id: Option<String>,
    pub gateway_order_id: Option<String>,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(props: NewOrderProps) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            order_number: generate_order_number(),
            idempotency_key: props.idempotency_key,
            user_id: props.user_id,
            customer_name: props.shipping.full_name(),
            customer_email: props.shipping.email.clone(),
            customer_phone: props.shipping.phone.clone(),
            items: props.items,
            subtotal: props.subtotal,
            total: props.total,
            shipping_address: props.shipping,
            payment_method: props.payment_method,
            payment_id: props.payment_id,
            gateway_order_id: props.gateway_order_id,
            status: props.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        order_number: String,
        idempotency_key: Uuid,
        user_id: UserId,
        items: Vec<CartItem>,
        subtotal: f64,
        total: f64,
        shipping_address: ShippingDetails,
        payment_method: PaymentMethod,
        payment_id: Option<String>,
        gateway_order_id: Option<String>,
        status: OrderStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            order_number,
            idempotency_key,
            user_id,
            customer_name: shipping_address.full_name(),
            customer_email: shipping_address.email.clone(),
            customer_phone: shipping_address.phone.clone(),
            items,
            subtotal,
            total,
            shipping_address,
            payment_method,
            payment_id,
            gateway_order_id,
            status,
            created_at,
            updated_at,
        }
    }
}

/// Human-facing order number: "TR" + millisecond tail + two random digits.
fn generate_order_number() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u8 = rand::rng().random_range(0..100);
    format!("TR{:06}{:02}", millis % 1_000_000, suffix)
}
