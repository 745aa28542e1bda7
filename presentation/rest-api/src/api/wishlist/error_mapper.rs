use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::wishlist::errors::WishlistError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for WishlistError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            WishlistError::AlreadyInWishlist => (
                StatusCode::CONFLICT,
                "Conflict",
                "wishlist.already_in_wishlist",
            ),
            WishlistError::Repository(_) => (
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
