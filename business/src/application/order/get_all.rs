use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_all::GetAllOrdersUseCase;

pub struct GetAllOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllOrdersUseCase for GetAllOrdersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.repository.get_all().await?;
        self.logger
            .debug(&format!("Listed {} orders", orders.len()));
        Ok(orders)
    }
}
