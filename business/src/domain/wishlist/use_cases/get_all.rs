use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistItem;

#[async_trait]
pub trait GetWishlistUseCase: Send + Sync {
    async fn execute(&self, user_id: &UserId) -> Result<Vec<WishlistItem>, WishlistError>;
}
