use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::catalog::use_cases::read_catalog::ReadCatalogUseCase;

use crate::api::catalog::dto::ProductResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    read_use_case: Arc<dyn ReadCatalogUseCase>,
}

impl CatalogApi {
    pub fn new(read_use_case: Arc<dyn ReadCatalogUseCase>) -> Self {
        Self { read_use_case }
    }
}

/// Catalog API
///
/// Read side of the product catalog. Browsing is public; refreshing the
/// held list from the database is an admin action.
#[OpenApi]
impl CatalogApi {
    /// List active products
    ///
    /// Returns the currently held product list. Inactive products are
    /// never included.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn get_products(&self) -> Json<Vec<ProductResponse>> {
        let products = self.read_use_case.products().await;
        Json(products.into_iter().map(|p| p.into()).collect())
    }

    /// Refresh the catalog
    ///
    /// Re-reads the product table and replaces the held list wholesale.
    /// Requires the admin role.
    #[oai(path = "/products/refresh", method = "post", tag = "ApiTags::Catalog")]
    async fn refresh_catalog(&self, auth: FirebaseBearer) -> RefreshCatalogResponse {
        if !auth.0.is_admin() {
            return RefreshCatalogResponse::Forbidden(Json(ErrorResponse {
                name: "Forbidden".to_string(),
                message: "auth.admin_required".to_string(),
            }));
        }

        match self.read_use_case.refetch().await {
            Ok(products) => {
                RefreshCatalogResponse::Ok(Json(products.into_iter().map(|p| p.into()).collect()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                RefreshCatalogResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RefreshCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
