use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::{NewWishlistItem, WishlistItem};
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::add::{AddToWishlistParams, AddToWishlistUseCase};

pub struct AddToWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToWishlistUseCase for AddToWishlistUseCaseImpl {
    async fn execute(&self, params: AddToWishlistParams) -> Result<WishlistItem, WishlistError> {
        let mut items = self.repository.load(&params.user_id).await?;

        if items.iter().any(|item| item.product_id == params.product_id) {
            return Err(WishlistError::AlreadyInWishlist);
        }

        let item = WishlistItem::new(NewWishlistItem {
            product_id: params.product_id,
            name: params.name,
            price: params.price,
            images: params.images,
            category: params.category,
        });
        items.push(item.clone());

        // Write-through: the whole list is re-serialized on every change.
        self.repository.save(&params.user_id, &items).await?;
        self.logger.info(&format!(
            "Wishlist add for {}: {}",
            params.user_id, item.product_id
        ));

        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub WishlistRepo {}

        #[async_trait]
        impl WishlistRepository for WishlistRepo {
            async fn load(&self, user_id: &UserId) -> Result<Vec<WishlistItem>, RepositoryError>;
            async fn save(&self, user_id: &UserId, items: &[WishlistItem]) -> Result<(), RepositoryError>;
            async fn clear(&self, user_id: &UserId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(product_id: &str) -> AddToWishlistParams {
        AddToWishlistParams {
            user_id: UserId::new("u1"),
            product_id: product_id.to_string(),
            name: "Classic Tee".to_string(),
            price: 499.0,
            images: vec!["/tee.jpg".to_string()],
            category: "tops".to_string(),
        }
    }

    #[tokio::test]
    async fn should_add_item_and_write_through() {
        let mut repo = MockWishlistRepo::new();
        repo.expect_load().returning(|_| Ok(vec![]));
        repo.expect_save()
            .withf(|_, items: &[WishlistItem]| items.len() == 1 && items[0].product_id == "tee")
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = AddToWishlistUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let item = use_case.execute(params("tee")).await.unwrap();
        assert_eq!(item.product_id, "tee");
    }

    #[tokio::test]
    async fn should_reject_duplicate_add_and_keep_one_entry() {
        let existing = WishlistItem::new(NewWishlistItem {
            product_id: "tee".to_string(),
            name: "Classic Tee".to_string(),
            price: 499.0,
            images: vec![],
            category: "tops".to_string(),
        });

        let mut repo = MockWishlistRepo::new();
        let existing_clone = existing.clone();
        repo.expect_load()
            .returning(move |_| Ok(vec![existing_clone.clone()]));
        // No save expectation: a duplicate add must not persist anything.

        let use_case = AddToWishlistUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("tee")).await;
        assert!(matches!(
            result.unwrap_err(),
            WishlistError::AlreadyInWishlist
        ));
    }
}
