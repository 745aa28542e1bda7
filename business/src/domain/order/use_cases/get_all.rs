use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;

/// Back-office listing of every order. Callers must already be
/// role-checked as admin.
#[async_trait]
pub trait GetAllOrdersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Order>, OrderError>;
}
