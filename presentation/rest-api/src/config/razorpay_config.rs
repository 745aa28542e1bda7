/// Configuration for Razorpay API access.
pub struct RazorpayConfig {
    pub key_id: String,
    pub key_secret: String,
}

impl RazorpayConfig {
    pub fn from_env() -> Self {
        Self {
            key_id: std::env::var("RAZORPAY_KEY_ID")
                .expect("RAZORPAY_KEY_ID environment variable must be set"),
            key_secret: std::env::var("RAZORPAY_KEY_SECRET")
                .expect("RAZORPAY_KEY_SECRET environment variable must be set"),
        }
    }
}
