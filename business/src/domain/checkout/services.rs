use async_trait::async_trait;

use crate::domain::cart::model::CartItem;

use super::model::PaymentMethod;

/// Outcome of a payment handshake as the gateway reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentConfirmation {
    pub payment_id: String,
    pub gateway_order_id: Option<String>,
    pub signature: Option<String>,
}

/// A shopper abandoning the payment is a distinct, expected outcome and
/// must never be reported as a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payment.cancelled")]
    Cancelled,
    #[error("payment.failed")]
    Failed,
    #[error("payment.gateway_unavailable")]
    Gateway,
}

#[derive(Debug, Clone)]
pub struct CollectPaymentRequest {
    pub gateway_order_id: String,
    pub amount_in_paise: i64,
    pub currency: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub preferred_method: PaymentMethod,
}

/// Payment collaborator port. `create_order` reserves the amount at the
/// gateway; `collect_payment` resolves what the shopper did with it.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_order(
        &self,
        amount_in_paise: i64,
        currency: &str,
    ) -> Result<String, PaymentError>;

    async fn collect_payment(
        &self,
        request: CollectPaymentRequest,
    ) -> Result<PaymentConfirmation, PaymentError>;
}

#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    pub customer_email: String,
    pub customer_name: String,
    pub order_number: String,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub delivery_address: String,
}

/// Transactional email port. Both operations are best-effort: the `bool`
/// result feeds a log line and nothing else.
#[async_trait]
pub trait OrderConfirmationSender: Send + Sync {
    async fn send_order_confirmation(&self, confirmation: &OrderConfirmation) -> bool;

    async fn send_shipping_update(&self, customer_email: &str, order_number: &str) -> bool;
}
