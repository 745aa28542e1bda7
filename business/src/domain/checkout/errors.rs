use super::validation::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.invalid_fields")]
    Validation(Vec<FieldError>),
    #[error("checkout.payment_order_creation_failed")]
    PaymentOrderCreation,
    /// The shopper dismissed the payment; keeps its own message so the
    /// notification reads "cancelled", not "failed".
    #[error("checkout.payment_cancelled")]
    PaymentCancelled,
    #[error("checkout.payment_failed")]
    PaymentFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
