use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistItem;

pub struct AddToWishlistParams {
    pub user_id: UserId,
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub images: Vec<String>,
    pub category: String,
}

#[async_trait]
pub trait AddToWishlistUseCase: Send + Sync {
    /// Adding a product already present fails with `AlreadyInWishlist`
    /// (surfaced as a notification, not a server fault) and leaves exactly
    /// one entry in place.
    async fn execute(&self, params: AddToWishlistParams) -> Result<WishlistItem, WishlistError>;
}
