#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error("wishlist.already_in_wishlist")]
    AlreadyInWishlist,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
