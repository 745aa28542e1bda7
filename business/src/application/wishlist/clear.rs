use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::clear::ClearWishlistUseCase;

pub struct ClearWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearWishlistUseCase for ClearWishlistUseCaseImpl {
    async fn execute(&self, user_id: &UserId) -> Result<(), WishlistError> {
        // Erases the persisted key, not just the in-memory list.
        self.repository.clear(user_id).await?;
        self.logger.info(&format!("Wishlist cleared for {}", user_id));
        Ok(())
    }
}
