use std::sync::Arc;

use async_trait::async_trait;

use super::lookup;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.name));

        lookup::find_existing(self.repository.as_ref(), &params.name).await?;

        let removed = self.repository.delete_by_name(&params.name).await?;

        self.logger.info(&format!(
            "Product deleted: {} ({} rows)",
            params.name, removed
        ));
        Ok(())
    }
}
