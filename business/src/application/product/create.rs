use std::sync::Arc;

use async_trait::async_trait;

use super::lookup;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(params.name)?;

        // An existing product with the same name is replaced by a fresh one
        if self.repository.find_by_name(&product.name).await?.is_some() {
            self.logger.warn(&format!(
                "Product {} already exists, replacing it",
                product.name
            ));
            self.repository.delete_by_name(&product.name).await?;
        }

        let created = lookup::save_and_reload(self.repository.as_ref(), &product).await?;

        self.logger
            .info(&format!("Product created with id: {}", created.id));
        Ok(created)
    }
}
