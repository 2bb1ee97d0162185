use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::purchase_requirement::errors::PurchaseRequirementError;
use crate::domain::purchase_requirement::model::PurchaseRequirement;
use crate::domain::purchase_requirement::repository::PurchaseRequirementRepository;
use crate::domain::purchase_requirement::use_cases::get_latest::GetLatestPurchaseRequirementsUseCase;

pub struct GetLatestPurchaseRequirementsUseCaseImpl {
    pub repository: Arc<dyn PurchaseRequirementRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetLatestPurchaseRequirementsUseCase for GetLatestPurchaseRequirementsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<PurchaseRequirement>, PurchaseRequirementError> {
        self.logger.info("Fetching latest purchase requirements");

        let Some(latest) = self.repository.find_max_time().await? else {
            self.logger
                .warn("Purchase requirements have never been generated");
            return Err(PurchaseRequirementError::Missing);
        };

        let mut requirements = self.repository.find_by_time(latest).await?;
        requirements.sort_by(|a, b| a.name.cmp(&b.name));

        self.logger.info(&format!(
            "Found {} purchase requirements generated at {}",
            requirements.len(),
            latest
        ));
        Ok(requirements)
    }
}
