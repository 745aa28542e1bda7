use serde::{Deserialize, Serialize};

use super::validation::sanitize_input;

/// Delivery details captured by the checkout form. Construct via
/// [`ShippingDetails::sanitized`] before validating or persisting so no
/// raw HTML ever reaches form state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl ShippingDetails {
    /// Strips HTML tags from every field, independent of format checks.
    pub fn sanitized(self) -> Self {
        Self {
            first_name: sanitize_input(&self.first_name),
            last_name: sanitize_input(&self.last_name),
            email: sanitize_input(&self.email),
            phone: sanitize_input(&self.phone),
            address: sanitize_input(&self.address),
            city: sanitize_input(&self.city),
            state: sanitize_input(&self.state),
            postal_code: sanitize_input(&self.postal_code),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Single-line address used for emails and order summaries.
    pub fn formatted_address(&self) -> String {
        format!(
            "{}, {}, {} - {}",
            self.address, self.city, self.state, self.postal_code
        )
    }
}

/// Payment methods offered at checkout. All but cash-on-delivery go
/// through the payment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Upi,
    Card,
    Wallet,
    NetBanking,
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn is_online(&self) -> bool {
        !matches!(self, PaymentMethod::CashOnDelivery)
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Upi => write!(f, "upi"),
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::Wallet => write!(f, "wallet"),
            PaymentMethod::NetBanking => write!(f, "netbanking"),
            PaymentMethod::CashOnDelivery => write!(f, "cod"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upi" => Ok(PaymentMethod::Upi),
            "card" => Ok(PaymentMethod::Card),
            "wallet" => Ok(PaymentMethod::Wallet),
            "netbanking" => Ok(PaymentMethod::NetBanking),
            "cod" => Ok(PaymentMethod::CashOnDelivery),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn details() -> ShippingDetails {
        ShippingDetails {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "98765 43210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            postal_code: "560001".to_string(),
        }
    }

    #[test]
    fn should_strip_tags_from_every_field() {
        let mut raw = details();
        raw.first_name = "<script>alert(1)</script>Asha".to_string();
        raw.address = "12 <b>MG</b> Road".to_string();

        let clean = raw.sanitized();

        assert_eq!(clean.first_name, "alert(1)Asha");
        assert_eq!(clean.address, "12 MG Road");
    }

    #[test]
    fn should_format_single_line_address() {
        assert_eq!(
            details().formatted_address(),
            "12 MG Road, Bengaluru, Karnataka - 560001"
        );
    }

    #[test]
    fn should_classify_online_methods() {
        assert!(PaymentMethod::Upi.is_online());
        assert!(PaymentMethod::NetBanking.is_online());
        assert!(!PaymentMethod::CashOnDelivery.is_online());
    }

    #[test]
    fn should_round_trip_payment_method_strings() {
        for method in [
            PaymentMethod::Upi,
            PaymentMethod::Card,
            PaymentMethod::Wallet,
            PaymentMethod::NetBanking,
            PaymentMethod::CashOnDelivery,
        ] {
            assert_eq!(PaymentMethod::from_str(&method.to_string()).unwrap(), method);
        }
    }
}
