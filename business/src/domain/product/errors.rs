#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.negative_amount")]
    NegativeAmount,
    #[error("product.not_found")]
    NotFound,
    #[error("product.update_failed")]
    UpdateFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
