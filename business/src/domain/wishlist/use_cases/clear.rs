use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;

#[async_trait]
pub trait ClearWishlistUseCase: Send + Sync {
    /// Empties the list and erases the persisted key for this user.
    async fn execute(&self, user_id: &UserId) -> Result<(), WishlistError>;
}
