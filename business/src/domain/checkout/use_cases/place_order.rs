use async_trait::async_trait;

use crate::domain::cart::model::CartItem;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{PaymentMethod, ShippingDetails};
use crate::domain::shared::value_objects::UserId;

pub struct PlaceOrderParams {
    pub user_id: UserId,
    /// Snapshot of the cart at submission time.
    pub items: Vec<CartItem>,
    pub shipping: ShippingDetails,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order_id: String,
    pub order_number: String,
    pub payment_id: Option<String>,
    pub total: f64,
}

/// The checkout orchestrator. One successful execution records exactly one
/// order; a retried form submission is a new attempt with a fresh
/// idempotency key, never a resubmission of the same order identifier.
#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<PlacedOrder, CheckoutError>;
}
