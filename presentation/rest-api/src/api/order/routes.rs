use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::order::model::OrderStatus;
use business::domain::order::use_cases::get_all::GetAllOrdersUseCase;
use business::domain::order::use_cases::get_for_user::GetOrdersForUserUseCase;
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{OrderResponse, UpdateOrderStatusRequest};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    get_for_user_use_case: Arc<dyn GetOrdersForUserUseCase>,
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
}

impl OrderApi {
    pub fn new(
        get_for_user_use_case: Arc<dyn GetOrdersForUserUseCase>,
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    ) -> Self {
        Self {
            get_for_user_use_case,
            get_all_use_case,
            update_status_use_case,
        }
    }

    fn forbidden() -> Json<ErrorResponse> {
        Json(ErrorResponse {
            name: "Forbidden".to_string(),
            message: "auth.admin_required".to_string(),
        })
    }
}

/// Order API
///
/// Order history for shoppers plus the admin back office. Admin access
/// is decided by the role claim on the verified token, never by who the
/// caller says they are.
#[OpenApi]
impl OrderApi {
    /// List the caller's orders
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_my_orders(&self, auth: FirebaseBearer) -> GetOrdersResponse {
        match self.get_for_user_use_case.execute(&auth.0.uid).await {
            Ok(orders) => {
                GetOrdersResponse::Ok(Json(orders.into_iter().map(|o| o.into()).collect()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetOrdersResponse::InternalError(json)
            }
        }
    }

    /// List every order (admin)
    #[oai(path = "/admin/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all_orders(&self, auth: FirebaseBearer) -> GetAllOrdersResponse {
        if !auth.0.is_admin() {
            return GetAllOrdersResponse::Forbidden(Self::forbidden());
        }

        match self.get_all_use_case.execute().await {
            Ok(orders) => {
                GetAllOrdersResponse::Ok(Json(orders.into_iter().map(|o| o.into()).collect()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetAllOrdersResponse::InternalError(json)
            }
        }
    }

    /// Update an order's status (admin)
    ///
    /// Moving an order to shipped also sends a best-effort shipping
    /// update email.
    #[oai(
        path = "/admin/orders/:id/status",
        method = "put",
        tag = "ApiTags::Orders"
    )]
    async fn update_status(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<UpdateOrderStatusRequest>,
    ) -> UpdateOrderStatusResponse {
        if !auth.0.is_admin() {
            return UpdateOrderStatusResponse::Forbidden(Self::forbidden());
        }

        let order_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateOrderStatusResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "order.invalid_id".to_string(),
                }));
            }
        };

        let status = match body.0.status.parse::<OrderStatus>() {
            Ok(status) => status,
            Err(_) => {
                return UpdateOrderStatusResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "order.invalid_status".to_string(),
                }));
            }
        };

        match self
            .update_status_use_case
            .execute(UpdateOrderStatusParams { order_id, status })
            .await
        {
            Ok(order) => UpdateOrderStatusResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateOrderStatusResponse::NotFound(json),
                    _ => UpdateOrderStatusResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateOrderStatusResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
