use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::purchase_requirement::errors::PurchaseRequirementError;
use crate::domain::purchase_requirement::model::PurchaseRequirement;
use crate::domain::purchase_requirement::repository::PurchaseRequirementRepository;
use crate::domain::purchase_requirement::use_cases::generate::GeneratePurchaseRequirementsUseCase;
use crate::domain::shared::time::Clock;

pub struct GeneratePurchaseRequirementsUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub requirement_repository: Arc<dyn PurchaseRequirementRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GeneratePurchaseRequirementsUseCase for GeneratePurchaseRequirementsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<PurchaseRequirement>, PurchaseRequirementError> {
        let time = self.clock.now_millis();
        self.logger
            .info(&format!("Generating purchase requirements at {}", time));

        let products = self.product_repository.get_all().await?;

        let mut requirements: Vec<PurchaseRequirement> = products
            .iter()
            .filter_map(|product| PurchaseRequirement::for_product(product, time))
            .collect();
        requirements.sort_by(|a, b| a.name.cmp(&b.name));

        for requirement in &requirements {
            self.requirement_repository.save(requirement).await?;
        }

        if requirements.is_empty() {
            self.logger
                .debug("No products below their minimum amount, nothing recorded");
        }

        self.logger.info(&format!(
            "Generated {} purchase requirements from {} products",
            requirements.len(),
            products.len()
        ));
        Ok(requirements)
    }
}
