use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_for_user::GetOrdersForUserUseCase;
use crate::domain::shared::value_objects::UserId;

pub struct GetOrdersForUserUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrdersForUserUseCase for GetOrdersForUserUseCaseImpl {
    async fn execute(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError> {
        let orders = self.repository.get_for_user(user_id).await?;
        self.logger
            .debug(&format!("Listed {} orders for {}", orders.len(), user_id));
        Ok(orders)
    }
}
