use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::WishlistItem;

/// Per-user wishlist persistence. The contract is a key-value one: the
/// whole item list is written through on every mutation (lists are small
/// and mutations rare), and `clear` erases the user's key entirely.
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// Returns the persisted list, or empty when the user has no key yet.
    async fn load(&self, user_id: &UserId) -> Result<Vec<WishlistItem>, RepositoryError>;
    async fn save(&self, user_id: &UserId, items: &[WishlistItem]) -> Result<(), RepositoryError>;
    async fn clear(&self, user_id: &UserId) -> Result<(), RepositoryError>;
}
