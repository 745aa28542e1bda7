/// Configuration for EmailJS transactional mail.
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    pub fn from_env() -> Self {
        Self {
            service_id: std::env::var("EMAILJS_SERVICE_ID")
                .expect("EMAILJS_SERVICE_ID environment variable must be set"),
            template_id: std::env::var("EMAILJS_TEMPLATE_ID")
                .expect("EMAILJS_TEMPLATE_ID environment variable must be set"),
            public_key: std::env::var("EMAILJS_PUBLIC_KEY")
                .expect("EMAILJS_PUBLIC_KEY environment variable must be set"),
        }
    }
}
