use async_trait::async_trait;

use crate::domain::purchase_requirement::errors::PurchaseRequirementError;
use crate::domain::purchase_requirement::model::PurchaseRequirement;

#[async_trait]
pub trait GetLatestPurchaseRequirementsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PurchaseRequirement>, PurchaseRequirementError>;
}
