use std::sync::Arc;

use async_trait::async_trait;

use super::lookup;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::block::{BlockProductParams, BlockProductUseCase};

pub struct BlockProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl BlockProductUseCaseImpl {
    async fn set_blocked(&self, name: &str, blocked: bool) -> Result<Product, ProductError> {
        let mut product = lookup::find_existing(self.repository.as_ref(), name).await?;
        product.set_blocked(blocked);
        lookup::save_and_reload(self.repository.as_ref(), &product).await
    }
}

#[async_trait]
impl BlockProductUseCase for BlockProductUseCaseImpl {
    async fn execute_block(&self, params: BlockProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Blocking product: {}", params.name));
        let product = self.set_blocked(&params.name, true).await?;
        self.logger.info(&format!("Product blocked: {}", product.name));
        Ok(product)
    }

    async fn execute_unblock(&self, params: BlockProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Unblocking product: {}", params.name));
        let product = self.set_blocked(&params.name, false).await?;
        self.logger
            .info(&format!("Product unblocked: {}", product.name));
        Ok(product)
    }
}
