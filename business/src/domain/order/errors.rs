#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(crate::domain::errors::RepositoryError),
}

impl From<crate::domain::errors::RepositoryError> for OrderError {
    fn from(err: crate::domain::errors::RepositoryError) -> Self {
        match err {
            crate::domain::errors::RepositoryError::NotFound => OrderError::NotFound,
            other => OrderError::Repository(other),
        }
    }
}
