use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::checkout::errors::CheckoutError;
use business::domain::checkout::model::PaymentMethod;
use business::domain::checkout::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};

use crate::api::cart::session::CartSessions;
use crate::api::checkout::dto::{
    CheckoutRequest, CheckoutValidationResponse, PlacedOrderResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
    sessions: Arc<CartSessions>,
}

impl CheckoutApi {
    pub fn new(place_order_use_case: Arc<dyn PlaceOrderUseCase>, sessions: Arc<CartSessions>) -> Self {
        Self {
            place_order_use_case,
            sessions,
        }
    }
}

/// Checkout API
///
/// The single entry point for placing an order. The session cart is
/// snapshotted at submission time and cleared only after the order is
/// recorded, so a failed attempt leaves the cart intact for a retry.
#[OpenApi]
impl CheckoutApi {
    /// Place an order from the current cart
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn place_order(
        &self,
        auth: FirebaseBearer,
        body: Json<CheckoutRequest>,
    ) -> PlaceOrderResponse {
        let payment_method = match body.0.payment_method.parse::<PaymentMethod>() {
            Ok(method) => method,
            Err(_) => {
                return PlaceOrderResponse::BadRequest(Json(CheckoutValidationResponse {
                    name: "ValidationError".to_string(),
                    message: "checkout.invalid_payment_method".to_string(),
                    fields: vec![],
                }));
            }
        };

        let user_id = auth.0.uid;
        let items = self.sessions.state(&user_id).into_items();

        let params = PlaceOrderParams {
            user_id: user_id.clone(),
            items,
            shipping: body.0.shipping.into(),
            payment_method,
        };

        match self.place_order_use_case.execute(params).await {
            Ok(placed) => {
                self.sessions.clear(&user_id);
                PlaceOrderResponse::Ok(Json(placed.into()))
            }
            Err(CheckoutError::Validation(fields)) => {
                PlaceOrderResponse::BadRequest(Json(CheckoutValidationResponse {
                    name: "ValidationError".to_string(),
                    message: "checkout.invalid_fields".to_string(),
                    fields: fields.into_iter().map(|f| f.into()).collect(),
                }))
            }
            Err(CheckoutError::EmptyCart) => {
                PlaceOrderResponse::BadRequest(Json(CheckoutValidationResponse {
                    name: "ValidationError".to_string(),
                    message: "checkout.empty_cart".to_string(),
                    fields: vec![],
                }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    402 => PlaceOrderResponse::PaymentRequired(json),
                    502 => PlaceOrderResponse::BadGateway(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 200)]
    Ok(Json<PlacedOrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<CheckoutValidationResponse>),
    #[oai(status = 402)]
    PaymentRequired(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
