use async_trait::async_trait;
use serde_json::json;

use business::domain::cart::model::CartItem;
use business::domain::checkout::services::{OrderConfirmation, OrderConfirmationSender};

use crate::client::EmailJsClient;

pub struct OrderConfirmationSenderEmailJs {
    client: EmailJsClient,
}

impl OrderConfirmationSenderEmailJs {
    pub fn new(client: EmailJsClient) -> Self {
        Self { client }
    }

    /// One line per cart row, template-friendly.
    fn format_items(items: &[CartItem]) -> String {
        items
            .iter()
            .map(|item| {
                format!(
                    "{} (Size: {}) x{} - Rs. {:.2}",
                    item.name,
                    item.size,
                    item.quantity,
                    item.line_total()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    async fn send(&self, template_params: serde_json::Value) -> bool {
        let body = json!({
            "service_id": self.client.service_id,
            "template_id": self.client.template_id,
            "user_id": self.client.public_key,
            "template_params": template_params,
        });

        let response = self
            .client
            .client
            .post(self.client.send_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await;

        match response {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl OrderConfirmationSender for OrderConfirmationSenderEmailJs {
    async fn send_order_confirmation(&self, confirmation: &OrderConfirmation) -> bool {
        let template_params = json!({
            "to_email": confirmation.customer_email,
            "to_name": confirmation.customer_name,
            "order_number": confirmation.order_number,
            "order_items": Self::format_items(&confirmation.items),
            "order_total": format!("Rs. {:.2}", confirmation.total),
            "delivery_address": confirmation.delivery_address,
        });

        self.send(template_params).await
    }

    async fn send_shipping_update(&self, customer_email: &str, order_number: &str) -> bool {
        let template_params = json!({
            "to_email": customer_email,
            "order_number": order_number,
            "subject": format!("Your order {} has shipped", order_number),
        });

        self.send(template_params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_one_line_per_cart_row() {
        let items = vec![
            CartItem {
                product_id: "tee".to_string(),
                name: "Classic Tee".to_string(),
                unit_price: 499.0,
                image: "/tee.jpg".to_string(),
                size: "M".to_string(),
                color: None,
                quantity: 2,
            },
            CartItem {
                product_id: "hoodie".to_string(),
                name: "Zip Hoodie".to_string(),
                unit_price: 1299.0,
                image: "/hoodie.jpg".to_string(),
                size: "L".to_string(),
                color: Some("Grey".to_string()),
                quantity: 1,
            },
        ];

        let formatted = OrderConfirmationSenderEmailJs::format_items(&items);
        assert_eq!(
            formatted,
            "Classic Tee (Size: M) x2 - Rs. 998.00\nZip Hoodie (Size: L) x1 - Rs. 1299.00"
        );
    }
}
