use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::wishlist::use_cases::add::{AddToWishlistParams, AddToWishlistUseCase};
use business::domain::wishlist::use_cases::clear::ClearWishlistUseCase;
use business::domain::wishlist::use_cases::get_all::GetWishlistUseCase;
use business::domain::wishlist::use_cases::remove::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::{AddWishlistItemRequest, WishlistItemResponse};

pub struct WishlistApi {
    add_use_case: Arc<dyn AddToWishlistUseCase>,
    remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
    get_use_case: Arc<dyn GetWishlistUseCase>,
    clear_use_case: Arc<dyn ClearWishlistUseCase>,
}

impl WishlistApi {
    pub fn new(
        add_use_case: Arc<dyn AddToWishlistUseCase>,
        remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
        get_use_case: Arc<dyn GetWishlistUseCase>,
        clear_use_case: Arc<dyn ClearWishlistUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            remove_use_case,
            get_use_case,
            clear_use_case,
        }
    }
}

/// Wishlist API
///
/// Per-user saved products, persisted across sessions.
#[OpenApi]
impl WishlistApi {
    /// List the wishlist
    #[oai(path = "/wishlist", method = "get", tag = "ApiTags::Wishlist")]
    async fn get_wishlist(&self, auth: FirebaseBearer) -> GetWishlistResponse {
        match self.get_use_case.execute(&auth.0.uid).await {
            Ok(items) => {
                GetWishlistResponse::Ok(Json(items.into_iter().map(|i| i.into()).collect()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetWishlistResponse::InternalError(json)
            }
        }
    }

    /// Save a product to the wishlist
    ///
    /// A product can appear at most once; saving it a second time is
    /// rejected with a conflict.
    #[oai(path = "/wishlist", method = "post", tag = "ApiTags::Wishlist")]
    async fn add_item(
        &self,
        auth: FirebaseBearer,
        body: Json<AddWishlistItemRequest>,
    ) -> AddWishlistItemResponse {
        let params = AddToWishlistParams {
            user_id: auth.0.uid,
            product_id: body.0.product_id,
            name: body.0.name,
            price: body.0.price,
            images: body.0.images,
            category: body.0.category,
        };

        match self.add_use_case.execute(params).await {
            Ok(item) => AddWishlistItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => AddWishlistItemResponse::Conflict(json),
                    _ => AddWishlistItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from the wishlist
    ///
    /// Removing a product that is not saved is a harmless no-op.
    #[oai(
        path = "/wishlist/:product_id",
        method = "delete",
        tag = "ApiTags::Wishlist"
    )]
    async fn remove_item(
        &self,
        auth: FirebaseBearer,
        product_id: Path<String>,
    ) -> RemoveWishlistItemResponse {
        let params = RemoveFromWishlistParams {
            user_id: auth.0.uid,
            product_id: product_id.0,
        };

        match self.remove_use_case.execute(params).await {
            Ok(()) => RemoveWishlistItemResponse::NoContent,
            Err(err) => {
                let (_, json) = err.into_error_response();
                RemoveWishlistItemResponse::InternalError(json)
            }
        }
    }

    /// Clear the wishlist
    #[oai(path = "/wishlist", method = "delete", tag = "ApiTags::Wishlist")]
    async fn clear_wishlist(&self, auth: FirebaseBearer) -> ClearWishlistResponse {
        match self.clear_use_case.execute(&auth.0.uid).await {
            Ok(()) => ClearWishlistResponse::NoContent,
            Err(err) => {
                let (_, json) = err.into_error_response();
                ClearWishlistResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<WishlistItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddWishlistItemResponse {
    #[oai(status = 201)]
    Created(Json<WishlistItemResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveWishlistItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearWishlistResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
