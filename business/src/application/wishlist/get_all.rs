use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistItem;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get_all::GetWishlistUseCase;

pub struct GetWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistUseCase for GetWishlistUseCaseImpl {
    async fn execute(&self, user_id: &UserId) -> Result<Vec<WishlistItem>, WishlistError> {
        let items = self.repository.load(user_id).await?;
        self.logger.debug(&format!(
            "Loaded {} wishlist items for {}",
            items.len(),
            user_id
        ));
        Ok(items)
    }
}
