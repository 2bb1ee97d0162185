use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::PurchaseRequirement;

#[async_trait]
pub trait PurchaseRequirementRepository: Send + Sync {
    /// Time of the most recent report, `None` if none was ever generated.
    async fn find_max_time(&self) -> Result<Option<i64>, RepositoryError>;
    async fn find_by_time(&self, time: i64) -> Result<Vec<PurchaseRequirement>, RepositoryError>;
    async fn save(&self, requirement: &PurchaseRequirement) -> Result<(), RepositoryError>;
}
