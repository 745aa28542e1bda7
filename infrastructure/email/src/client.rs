use reqwest::Client;

/// Shared EmailJS HTTP client configuration.
pub struct EmailJsClient {
    pub client: Client,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub base_url: String,
}

impl EmailJsClient {
    pub fn new(service_id: String, template_id: String, public_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            service_id,
            template_id,
            public_key,
            base_url: "https://api.emailjs.com/api/v1.0".to_string(),
        }
    }

    /// Returns the send endpoint URL.
    pub fn send_url(&self) -> String {
        format!("{}/email/send", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_send_url() {
        let client = EmailJsClient::new(
            "service_1".to_string(),
            "template_1".to_string(),
            "key".to_string(),
        );
        assert_eq!(
            client.send_url(),
            "https://api.emailjs.com/api/v1.0/email/send"
        );
    }
}
