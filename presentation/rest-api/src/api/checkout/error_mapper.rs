use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CheckoutError::EmptyCart => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "checkout.empty_cart",
            ),
            CheckoutError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "checkout.invalid_fields",
            ),
            CheckoutError::PaymentOrderCreation => (
                StatusCode::BAD_GATEWAY,
                "PaymentError",
                "checkout.payment_order_creation_failed",
            ),
            CheckoutError::PaymentCancelled => (
                StatusCode::PAYMENT_REQUIRED,
                "PaymentCancelled",
                "checkout.payment_cancelled",
            ),
            CheckoutError::PaymentFailed => (
                StatusCode::PAYMENT_REQUIRED,
                "PaymentError",
                "checkout.payment_failed",
            ),
            CheckoutError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
