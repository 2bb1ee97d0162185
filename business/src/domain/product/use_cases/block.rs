use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct BlockProductParams {
    pub name: String,
}

/// Blocked products are excluded from purchase requirement reports.
#[async_trait]
pub trait BlockProductUseCase: Send + Sync {
    async fn execute_block(&self, params: BlockProductParams) -> Result<Product, ProductError>;

    async fn execute_unblock(&self, params: BlockProductParams) -> Result<Product, ProductError>;
}
