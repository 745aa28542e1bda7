use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::remove::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

pub struct RemoveFromWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromWishlistUseCase for RemoveFromWishlistUseCaseImpl {
    async fn execute(&self, params: RemoveFromWishlistParams) -> Result<(), WishlistError> {
        let mut items = self.repository.load(&params.user_id).await?;
        items.retain(|item| item.product_id != params.product_id);
        self.repository.save(&params.user_id, &items).await?;

        self.logger.info(&format!(
            "Wishlist remove for {}: {}",
            params.user_id, params.product_id
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::wishlist::model::{NewWishlistItem, WishlistItem};
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

    fn item(id: &str) -> WishlistItem {
        WishlistItem::new(NewWishlistItem {
            product_id: id.to_string(),
            name: id.to_string(),
            price: 100.0,
            images: vec![],
            category: "tops".to_string(),
        })
    }

    #[tokio::test]
    async fn should_remove_matching_item() {
        let mut repo = MockWishlistRepo::new();
        repo.expect_load()
            .returning(|_| Ok(vec![item("tee"), item("cap")]));
        repo.expect_save()
            .withf(|_, items: &[WishlistItem]| {
                items.len() == 1 && items[0].product_id == "cap"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = RemoveFromWishlistUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveFromWishlistParams {
                user_id: UserId::new("u1"),
                product_id: "tee".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_treat_absent_item_as_no_op() {
        let mut repo = MockWishlistRepo::new();
        repo.expect_load().returning(|_| Ok(vec![item("cap")]));
        repo.expect_save()
            .withf(|_, items: &[WishlistItem]| items.len() == 1)
            .returning(|_, _| Ok(()));

        let use_case = RemoveFromWishlistUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveFromWishlistParams {
                user_id: UserId::new("u1"),
                product_id: "missing".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }
}
