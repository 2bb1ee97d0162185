use async_trait::async_trait;

use crate::domain::purchase_requirement::errors::PurchaseRequirementError;
use crate::domain::purchase_requirement::model::PurchaseRequirement;

pub struct OverrideAmountParams {
    pub name: String,
    pub amount: i64,
}

/// Replaces the amount to purchase for one product in the latest report.
#[async_trait]
pub trait OverrideAmountUseCase: Send + Sync {
    async fn execute(
        &self,
        params: OverrideAmountParams,
    ) -> Result<PurchaseRequirement, PurchaseRequirementError>;
}
