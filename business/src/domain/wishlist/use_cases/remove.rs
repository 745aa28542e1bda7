use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;

pub struct RemoveFromWishlistParams {
    pub user_id: UserId,
    pub product_id: String,
}

#[async_trait]
pub trait RemoveFromWishlistUseCase: Send + Sync {
    /// Removing an absent product is a no-op, not an error.
    async fn execute(&self, params: RemoveFromWishlistParams) -> Result<(), WishlistError>;
}
