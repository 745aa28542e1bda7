use base64::Engine;
use reqwest::Client;

/// Shared Razorpay HTTP client configuration.
pub struct RazorpayClient {
    pub client: Client,
    pub key_id: String,
    pub key_secret: String,
    pub base_url: String,
}

impl RazorpayClient {
    pub fn new(key_id: String, key_secret: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            key_id,
            key_secret,
            base_url: "https://api.razorpay.com/v1".to_string(),
        }
    }

    /// Builds the basic auth header value from the API key pair.
    pub fn auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.key_id, self.key_secret);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credentials)
        )
    }

    /// Returns the order creation endpoint URL.
    pub fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }

    /// Returns the payment listing endpoint URL for an order.
    pub fn order_payments_url(&self, order_id: &str) -> String {
        format!("{}/orders/{}/payments", self.base_url, order_id)
    }
}
