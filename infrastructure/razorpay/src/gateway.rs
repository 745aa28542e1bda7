use async_trait::async_trait;
use serde_json::json;

use business::domain::checkout::services::{
    CollectPaymentRequest, PaymentConfirmation, PaymentError, PaymentGateway,
};

use crate::client::RazorpayClient;

pub struct PaymentGatewayRazorpay {
    client: RazorpayClient,
}

impl PaymentGatewayRazorpay {
    pub fn new(client: RazorpayClient) -> Self {
        Self { client }
    }

    /// Resolves a gateway order's payment list into an outcome. No
    /// attempts means the shopper walked away; attempts without a capture
    /// means every try failed.
    fn classify_payments(
        gateway_order_id: &str,
        payments: &[serde_json::Value],
    ) -> Result<PaymentConfirmation, PaymentError> {
        let captured = payments.iter().find(|payment| {
            payment.get("status").and_then(|s| s.as_str()) == Some("captured")
        });

        if let Some(payment) = captured {
            let payment_id = payment
                .get("id")
                .and_then(|id| id.as_str())
                .ok_or(PaymentError::Gateway)?
                .to_string();

            return Ok(PaymentConfirmation {
                payment_id,
                gateway_order_id: Some(gateway_order_id.to_string()),
                signature: None,
            });
        }

        if payments.is_empty() {
            Err(PaymentError::Cancelled)
        } else {
            Err(PaymentError::Failed)
        }
    }
}

#[async_trait]
impl PaymentGateway for PaymentGatewayRazorpay {
    async fn create_order(
        &self,
        amount_in_paise: i64,
        currency: &str,
    ) -> Result<String, PaymentError> {
        let body = json!({
            "amount": amount_in_paise,
            "currency": currency,
            "payment_capture": 1,
        });

        let response = self
            .client
            .client
            .post(self.client.orders_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| PaymentError::Gateway)?;

        if !response.status().is_success() {
            return Err(PaymentError::Gateway);
        }

        let data: serde_json::Value = response.json().await.map_err(|_| PaymentError::Gateway)?;

        data.get("id")
            .and_then(|id| id.as_str())
            .map(|id| id.to_string())
            .ok_or(PaymentError::Gateway)
    }

    async fn collect_payment(
        &self,
        request: CollectPaymentRequest,
    ) -> Result<PaymentConfirmation, PaymentError> {
        let response = self
            .client
            .client
            .get(self.client.order_payments_url(&request.gateway_order_id))
            .header("Authorization", self.client.auth_header())
            .send()
            .await
            .map_err(|_| PaymentError::Gateway)?;

        if !response.status().is_success() {
            return Err(PaymentError::Gateway);
        }

        let data: serde_json::Value = response.json().await.map_err(|_| PaymentError::Gateway)?;

        let payments = data
            .get("items")
            .and_then(|items| items.as_array())
            .cloned()
            .unwrap_or_default();

        Self::classify_payments(&request.gateway_order_id, &payments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_confirm_captured_payment() {
        let payments = vec![
            json!({"id": "pay_failed", "status": "failed"}),
            json!({"id": "pay_ok", "status": "captured"}),
        ];

        let confirmation =
            PaymentGatewayRazorpay::classify_payments("order_1", &payments).unwrap();
        assert_eq!(confirmation.payment_id, "pay_ok");
        assert_eq!(confirmation.gateway_order_id.as_deref(), Some("order_1"));
    }

    #[test]
    fn should_report_cancellation_when_no_attempts_exist() {
        let result = PaymentGatewayRazorpay::classify_payments("order_1", &[]);
        assert!(matches!(result.unwrap_err(), PaymentError::Cancelled));
    }

    #[test]
    fn should_report_failure_when_attempts_never_captured() {
        let payments = vec![json!({"id": "pay_1", "status": "failed"})];

        let result = PaymentGatewayRazorpay::classify_payments("order_1", &payments);
        assert!(matches!(result.unwrap_err(), PaymentError::Failed));
    }
}
