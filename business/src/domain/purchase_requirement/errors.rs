#[derive(Debug, thiserror::Error)]
pub enum PurchaseRequirementError {
    #[error("purchase_requirement.name_empty")]
    NameEmpty,
    #[error("purchase_requirement.negative_amount")]
    NegativeAmount,
    /// No report has been generated yet.
    #[error("purchase_requirement.missing")]
    Missing,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
