use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::store::CartAction;

use crate::api::cart::dto::{AddCartItemRequest, CartStateResponse, UpdateCartQuantityRequest};
use crate::api::cart::session::CartSessions;
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct CartApi {
    sessions: Arc<CartSessions>,
}

impl CartApi {
    pub fn new(sessions: Arc<CartSessions>) -> Self {
        Self { sessions }
    }
}

/// Cart API
///
/// Per-user session cart. Every mutation returns the full resulting cart
/// state so clients never have to derive totals themselves.
#[OpenApi]
impl CartApi {
    /// Get the current cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, auth: FirebaseBearer) -> Json<CartStateResponse> {
        Json(self.sessions.state(&auth.0.uid).into())
    }

    /// Add one unit of a product to the cart
    ///
    /// Adding a product that already sits in the cart in the same size
    /// increments that row instead of appending a duplicate.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        auth: FirebaseBearer,
        body: Json<AddCartItemRequest>,
    ) -> Json<CartStateResponse> {
        let state = self
            .sessions
            .dispatch(&auth.0.uid, CartAction::AddItem(body.0.into()));
        Json(state.into())
    }

    /// Set the quantity of a product
    ///
    /// A quantity of zero or below removes the product from the cart.
    #[oai(path = "/cart/items/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        auth: FirebaseBearer,
        product_id: Path<String>,
        body: Json<UpdateCartQuantityRequest>,
    ) -> Json<CartStateResponse> {
        let state = self.sessions.dispatch(
            &auth.0.uid,
            CartAction::UpdateQuantity {
                product_id: product_id.0,
                quantity: body.0.quantity,
            },
        );
        Json(state.into())
    }

    /// Remove a product from the cart
    ///
    /// Removes every row carrying this product id, regardless of size.
    #[oai(
        path = "/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(
        &self,
        auth: FirebaseBearer,
        product_id: Path<String>,
    ) -> Json<CartStateResponse> {
        let state = self.sessions.dispatch(
            &auth.0.uid,
            CartAction::RemoveItem {
                product_id: product_id.0,
            },
        );
        Json(state.into())
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, auth: FirebaseBearer) -> Json<CartStateResponse> {
        let state = self.sessions.dispatch(&auth.0.uid, CartAction::Clear);
        Json(state.into())
    }
}
