use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::checkout::services::OrderConfirmationSender;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderStatus};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

pub struct UpdateOrderStatusUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub email_sender: Arc<dyn OrderConfirmationSender>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderStatusUseCase for UpdateOrderStatusUseCaseImpl {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError> {
        let order = self
            .repository
            .update_status(params.order_id, params.status)
            .await?;

        if order.status == OrderStatus::Shipped {
            // Best-effort: a bounced email never rolls back the transition.
            let sent = self
                .email_sender
                .send_shipping_update(&order.customer_email, &order.order_number)
                .await;
            if !sent {
                self.logger.warn(&format!(
                    "Shipping update email not sent for order {}",
                    order.order_number
                ));
            }
        }

        self.logger.info(&format!(
            "Order {} moved to {}",
            order.order_number, order.status
        ));
        Ok(order)
    }
}
