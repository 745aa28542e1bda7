use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::model::CartState;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::PaymentMethod;
use crate::domain::checkout::pricing::{amount_in_paise, total_with_tax};
use crate::domain::checkout::services::{
    CollectPaymentRequest, OrderConfirmation, OrderConfirmationSender, PaymentError,
    PaymentGateway,
};
use crate::domain::checkout::use_cases::place_order::{
    PlaceOrderParams, PlaceOrderUseCase, PlacedOrder,
};
use crate::domain::checkout::validation::validate_shipping;
use crate::domain::logger::Logger;
use crate::domain::order::model::{NewOrderProps, Order, OrderStatus};
use crate::domain::order::repository::OrderRepository;

pub struct PlaceOrderUseCaseImpl {
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub email_sender: Arc<dyn OrderConfirmationSender>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<PlacedOrder, CheckoutError> {
        // Gates run before any side effect: an invalid form must not
        // reach a single collaborator.
        if params.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let shipping = params.shipping.sanitized();
        let field_errors = validate_shipping(&shipping);
        if !field_errors.is_empty() {
            return Err(CheckoutError::Validation(field_errors));
        }

        let cart = CartState::with_items(params.items);
        let subtotal = cart.total();
        let total = total_with_tax(subtotal);
        // Fresh key per attempt: a retried submission is a new order, a
        // retried save of this attempt is not.
        let idempotency_key = Uuid::new_v4();

        self.logger.info(&format!(
            "Placing order for {}: {} items, total {}",
            params.user_id,
            cart.item_count(),
            total
        ));

        if params.payment_method == PaymentMethod::CashOnDelivery {
            let order = Order::new(NewOrderProps {
                idempotency_key,
                user_id: params.user_id,
                items: cart.into_items(),
                subtotal,
                total,
                shipping,
                payment_method: PaymentMethod::CashOnDelivery,
                payment_id: None,
                gateway_order_id: None,
                status: OrderStatus::Pending,
            });
            let order_id = self.order_repository.save(&order).await?;

            self.logger
                .info(&format!("COD order recorded: {}", order.order_number));
            return Ok(PlacedOrder {
                order_id: order_id.to_string(),
                order_number: order.order_number,
                payment_id: None,
                total,
            });
        }

        // Online methods: reserve at the gateway, then resolve payment.
        let paise = amount_in_paise(total);
        let gateway_order_id = self
            .payment_gateway
            .create_order(paise, "INR")
            .await
            .map_err(|err| {
                self.logger
                    .error(&format!("Gateway order creation failed: {err}"));
                CheckoutError::PaymentOrderCreation
            })?;

        let confirmation = self
            .payment_gateway
            .collect_payment(CollectPaymentRequest {
                gateway_order_id: gateway_order_id.clone(),
                amount_in_paise: paise,
                currency: "INR".to_string(),
                customer_name: shipping.full_name(),
                customer_email: shipping.email.clone(),
                customer_phone: shipping.phone.clone(),
                preferred_method: params.payment_method,
            })
            .await
            .map_err(|err| match err {
                PaymentError::Cancelled => CheckoutError::PaymentCancelled,
                _ => {
                    self.logger.error(&format!("Payment failed: {err}"));
                    CheckoutError::PaymentFailed
                }
            })?;

        let order = Order::new(NewOrderProps {
            idempotency_key,
            user_id: params.user_id,
            items: cart.into_items(),
            subtotal,
            total,
            shipping,
            payment_method: params.payment_method,
            payment_id: Some(confirmation.payment_id.clone()),
            gateway_order_id: Some(gateway_order_id),
            status: OrderStatus::Confirmed,
        });
        let order_id = self.order_repository.save(&order).await?;
        self.logger
            .info(&format!("Order recorded: {}", order.order_number));

        // Best-effort: a failed confirmation email never rolls back or
        // blocks the recorded order.
        let sent = self
            .email_sender
            .send_order_confirmation(&OrderConfirmation {
                customer_email: order.customer_email.clone(),
                customer_name: order.customer_name.clone(),
                order_number: order.order_number.clone(),
                items: order.items.clone(),
                total,
                delivery_address: order.shipping_address.formatted_address(),
            })
            .await;
        if !sent {
            self.logger.warn(&format!(
                "Confirmation email failed for order {}",
                order.order_number
            ));
        }

        Ok(PlacedOrder {
            order_id: order_id.to_string(),
            order_number: order.order_number,
            payment_id: Some(confirmation.payment_id),
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartItem;
    use crate::domain::checkout::model::ShippingDetails;
    use crate::domain::checkout::services::PaymentConfirmation;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl PaymentGateway for Gateway {
            async fn create_order(&self, amount_in_paise: i64, currency: &str) -> Result<String, PaymentError>;
            async fn collect_payment(&self, request: CollectPaymentRequest) -> Result<PaymentConfirmation, PaymentError>;
        }
    }

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn save(&self, order: &Order) -> Result<Uuid, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
            async fn get_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
            async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<Order, RepositoryError>;
        }
    }

    mock! {
        pub Sender {}

        #[async_trait]
        impl OrderConfirmationSender for Sender {
            async fn send_order_confirmation(&self, confirmation: &OrderConfirmation) -> bool;
            async fn send_shipping_update(&self, customer_email: &str, order_number: &str) -> bool;
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

    fn cart_items() -> Vec<CartItem> {
        vec![
            CartItem {
                product_id: "tee".to_string(),
                name: "Classic Tee".to_string(),
                unit_price: 499.0,
                image: "/tee.jpg".to_string(),
                size: "M".to_string(),
                color: None,
                quantity: 2,
            },
            CartItem {
                product_id: "hoodie".to_string(),
                name: "Zip Hoodie".to_string(),
                unit_price: 1299.0,
                image: "/hoodie.jpg".to_string(),
                size: "L".to_string(),
                color: Some("Black".to_string()),
                quantity: 1,
            },
        ]
    }

    fn valid_shipping() -> ShippingDetails {
        ShippingDetails {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            postal_code: "560001".to_string(),
        }
    }

    fn params(payment_method: PaymentMethod) -> PlaceOrderParams {
        PlaceOrderParams {
            user_id: UserId::new("u1"),
            items: cart_items(),
            shipping: valid_shipping(),
            payment_method,
        }
    }

    fn use_case(
        gateway: MockGateway,
        repo: MockOrderRepo,
        sender: MockSender,
    ) -> PlaceOrderUseCaseImpl {
        PlaceOrderUseCaseImpl {
            payment_gateway: Arc::new(gateway),
            order_repository: Arc::new(repo),
            email_sender: Arc::new(sender),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_record_cod_order_without_touching_gateway() {
        let gateway = MockGateway::new();
        let mut repo = MockOrderRepo::new();
        repo.expect_save()
            .withf(|order: &Order| {
                order.status == OrderStatus::Pending
                    && order.payment_id.is_none()
                    && order.subtotal == 2297.0
            })
            .times(1)
            .returning(|order| Ok(order.id));
        let sender = MockSender::new();

        let result = use_case(gateway, repo, sender)
            .execute(params(PaymentMethod::CashOnDelivery))
            .await;

        let placed = result.unwrap();
        assert!(placed.payment_id.is_none());
        // subtotal 2297 → round(2297 × 1.12) = 2573
        assert_eq!(placed.total, 2573.0);
    }

    #[tokio::test]
    async fn should_complete_online_payment_and_record_confirmed_order() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_create_order()
            .with(eq(257300i64), eq("INR"))
            .times(1)
            .returning(|_, _| Ok("order_rzp_1".to_string()));
        gateway
            .expect_collect_payment()
            .withf(|req: &CollectPaymentRequest| {
                req.gateway_order_id == "order_rzp_1" && req.amount_in_paise == 257300
            })
            .times(1)
            .returning(|_| {
                Ok(PaymentConfirmation {
                    payment_id: "pay_123".to_string(),
                    gateway_order_id: Some("order_rzp_1".to_string()),
                    signature: None,
                })
            });

        let mut repo = MockOrderRepo::new();
        repo.expect_save()
            .withf(|order: &Order| {
                order.status == OrderStatus::Confirmed
                    && order.payment_id.as_deref() == Some("pay_123")
                    && order.gateway_order_id.as_deref() == Some("order_rzp_1")
            })
            .times(1)
            .returning(|order| Ok(order.id));

        let mut sender = MockSender::new();
        sender
            .expect_send_order_confirmation()
            .times(1)
            .returning(|_| true);

        let result = use_case(gateway, repo, sender)
            .execute(params(PaymentMethod::Upi))
            .await;

        let placed = result.unwrap();
        assert_eq!(placed.payment_id.as_deref(), Some("pay_123"));
        assert_eq!(placed.total, 2573.0);
    }

    #[tokio::test]
    async fn should_reject_empty_cart_before_any_collaborator_call() {
        let mut p = params(PaymentMethod::Upi);
        p.items.clear();

        let result = use_case(MockGateway::new(), MockOrderRepo::new(), MockSender::new())
            .execute(p)
            .await;

        assert!(matches!(result.unwrap_err(), CheckoutError::EmptyCart));
    }

    #[tokio::test]
    async fn should_reject_invalid_email_without_network_calls() {
        let mut p = params(PaymentMethod::Upi);
        p.shipping.email = "not-an-email".to_string();

        // No expectations set: any collaborator call would panic.
        let result = use_case(MockGateway::new(), MockOrderRepo::new(), MockSender::new())
            .execute(p)
            .await;

        match result.unwrap_err() {
            CheckoutError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "email");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_surface_gateway_order_creation_failure_as_retriable() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_create_order()
            .times(1)
            .returning(|_, _| Err(PaymentError::Gateway));

        let result = use_case(gateway, MockOrderRepo::new(), MockSender::new())
            .execute(params(PaymentMethod::Card))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::PaymentOrderCreation
        ));
    }

    #[tokio::test]
    async fn should_distinguish_cancellation_from_failure() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_create_order()
            .returning(|_, _| Ok("order_rzp_2".to_string()));
        gateway
            .expect_collect_payment()
            .returning(|_| Err(PaymentError::Cancelled));

        let result = use_case(gateway, MockOrderRepo::new(), MockSender::new())
            .execute(params(PaymentMethod::Wallet))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::PaymentCancelled
        ));
    }

    #[tokio::test]
    async fn should_complete_checkout_even_when_email_fails() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_create_order()
            .returning(|_, _| Ok("order_rzp_3".to_string()));
        gateway.expect_collect_payment().returning(|_| {
            Ok(PaymentConfirmation {
                payment_id: "pay_456".to_string(),
                gateway_order_id: None,
                signature: None,
            })
        });
        let mut repo = MockOrderRepo::new();
        repo.expect_save().times(1).returning(|order| Ok(order.id));
        let mut sender = MockSender::new();
        sender
            .expect_send_order_confirmation()
            .returning(|_| false);

        let result = use_case(gateway, repo, sender)
            .execute(params(PaymentMethod::NetBanking))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_generate_fresh_idempotency_key_per_attempt() {
        use std::sync::Mutex;

        let keys: Arc<Mutex<Vec<Uuid>>> = Arc::new(Mutex::new(Vec::new()));
        let keys_clone = keys.clone();

        let mut repo = MockOrderRepo::new();
        repo.expect_save().times(2).returning(move |order| {
            keys_clone.lock().unwrap().push(order.idempotency_key);
            Ok(order.id)
        });

        let use_case = use_case(MockGateway::new(), repo, MockSender::new());
        use_case
            .execute(params(PaymentMethod::CashOnDelivery))
            .await
            .unwrap();
        use_case
            .execute(params(PaymentMethod::CashOnDelivery))
            .await
            .unwrap();

        let keys = keys.lock().unwrap();
        assert_ne!(keys[0], keys[1]);
    }
}
