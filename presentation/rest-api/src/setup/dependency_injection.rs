use std::sync::Arc;

use logger::TracingLogger;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::CatalogRepositoryPostgres;
use persistence::wishlist::repository::WishlistRepositoryPostgres;

use email::client::EmailJsClient;
use email::sender::OrderConfirmationSenderEmailJs;
use razorpay::client::RazorpayClient;
use razorpay::gateway::PaymentGatewayRazorpay;

use business::application::catalog::reader::CatalogReader;
use business::application::checkout::place_order::PlaceOrderUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::get_for_user::GetOrdersForUserUseCaseImpl;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;
use business::application::wishlist::add::AddToWishlistUseCaseImpl;
use business::application::wishlist::clear::ClearWishlistUseCaseImpl;
use business::application::wishlist::get_all::GetWishlistUseCaseImpl;
use business::application::wishlist::remove::RemoveFromWishlistUseCaseImpl;
use business::domain::catalog::use_cases::read_catalog::ReadCatalogUseCase;
use business::domain::logger::Logger;

use crate::api::cart::session::CartSessions;
use crate::config::email_config::EmailConfig;
use crate::config::razorpay_config::RazorpayConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub wishlist_api: crate::api::wishlist::routes::WishlistApi,
    pub checkout_api: crate::api::checkout::routes::CheckoutApi,
    pub order_api: crate::api::order::routes::OrderApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let catalog_repository = Arc::new(CatalogRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let wishlist_repository = Arc::new(WishlistRepositoryPostgres::new(pool));

        let razorpay_config = RazorpayConfig::from_env();
        let razorpay_client =
            RazorpayClient::new(razorpay_config.key_id, razorpay_config.key_secret);
        let payment_gateway = Arc::new(PaymentGatewayRazorpay::new(razorpay_client));

        let email_config = EmailConfig::from_env();
        let email_client = EmailJsClient::new(
            email_config.service_id,
            email_config.template_id,
            email_config.public_key,
        );
        let email_sender = Arc::new(OrderConfirmationSenderEmailJs::new(email_client));

        // Session carts live in the presentation layer
        let cart_sessions = Arc::new(CartSessions::new());

        // Catalog use cases; load the held list once at startup so
        // browsing works before any admin refresh
        let catalog_reader = Arc::new(CatalogReader::new(
            catalog_repository.clone(),
            logger.clone(),
        ));
        if catalog_reader.refetch().await.is_err() {
            logger.warn("Initial catalog load failed; product list starts empty");
        }

        // Checkout use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            payment_gateway: payment_gateway.clone(),
            order_repository: order_repository.clone(),
            email_sender: email_sender.clone(),
            logger: logger.clone(),
        });

        // Wishlist use cases
        let add_to_wishlist_use_case = Arc::new(AddToWishlistUseCaseImpl {
            repository: wishlist_repository.clone(),
            logger: logger.clone(),
        });
        let remove_from_wishlist_use_case = Arc::new(RemoveFromWishlistUseCaseImpl {
            repository: wishlist_repository.clone(),
            logger: logger.clone(),
        });
        let get_wishlist_use_case = Arc::new(GetWishlistUseCaseImpl {
            repository: wishlist_repository.clone(),
            logger: logger.clone(),
        });
        let clear_wishlist_use_case = Arc::new(ClearWishlistUseCaseImpl {
            repository: wishlist_repository,
            logger: logger.clone(),
        });

        // Order use cases
        let get_orders_for_user_use_case = Arc::new(GetOrdersForUserUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_orders_use_case = Arc::new(GetAllOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let update_order_status_use_case = Arc::new(UpdateOrderStatusUseCaseImpl {
            repository: order_repository,
            email_sender,
            logger,
        });

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(catalog_reader);
        let cart_api = crate::api::cart::routes::CartApi::new(cart_sessions.clone());
        let wishlist_api = crate::api::wishlist::routes::WishlistApi::new(
            add_to_wishlist_use_case,
            remove_from_wishlist_use_case,
            get_wishlist_use_case,
            clear_wishlist_use_case,
        );
        let checkout_api =
            crate::api::checkout::routes::CheckoutApi::new(place_order_use_case, cart_sessions);
        let order_api = crate::api::order::routes::OrderApi::new(
            get_orders_for_user_use_case,
            get_all_orders_use_case,
            update_order_status_use_case,
        );

        Ok(Self {
            health_api,
            catalog_api,
            cart_api,
            wishlist_api,
            checkout_api,
            order_api,
        })
    }
}
