use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::checkout::model::ShippingDetails;
use business::domain::checkout::use_cases::place_order::PlacedOrder;
use business::domain::checkout::validation::FieldError;

#[derive(Debug, Clone, Object)]
pub struct ShippingDetailsDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl From<ShippingDetailsDto> for ShippingDetails {
    fn from(dto: ShippingDetailsDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            postal_code: dto.postal_code,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    pub shipping: ShippingDetailsDto,
    /// One of: upi, card, wallet, netbanking, cod
    pub payment_method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

impl From<FieldError> for FieldErrorDto {
    fn from(error: FieldError) -> Self {
        Self {
            field: error.field,
            message: error.message,
        }
    }
}

/// Body of a rejected checkout; `fields` names each offending input.
#[derive(Debug, Clone, Object)]
pub struct CheckoutValidationResponse {
    pub name: String,
    pub message: String,
    pub fields: Vec<FieldErrorDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct PlacedOrderResponse {
    pub order_id: String,
    pub order_number: String,
    /// Present for online payments, absent for cash on delivery
    #[oai(skip_serializing_if_is_none)]
    pub payment_id: Option<String>,
    /// Grand total including tax, in rupees
    pub total: f64,
}

impl From<PlacedOrder> for PlacedOrderResponse {
    fn from(placed: PlacedOrder) -> Self {
        Self {
            order_id: placed.order_id,
            order_number: placed.order_number,
            payment_id: placed.payment_id,
            total: placed.total,
        }
    }
}
