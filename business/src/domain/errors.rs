/// Repository errors shared by every persistence port.
/// Error messages are code-style identifiers for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.database_error")]
    DatabaseError,
}
