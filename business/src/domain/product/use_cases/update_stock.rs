use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct SetAmountParams {
    pub name: String,
    pub amount: i64,
}

#[async_trait]
pub trait UpdateStockUseCase: Send + Sync {
    async fn set_current_amount(&self, params: SetAmountParams) -> Result<Product, ProductError>;

    async fn set_min_amount(&self, params: SetAmountParams) -> Result<Product, ProductError>;
}
