use std::sync::Arc;

use async_trait::async_trait;

use super::lookup;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update_stock::{SetAmountParams, UpdateStockUseCase};

pub struct UpdateStockUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateStockUseCase for UpdateStockUseCaseImpl {
    async fn set_current_amount(&self, params: SetAmountParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Setting current amount of {} to {}",
            params.name, params.amount
        ));

        let mut product = lookup::find_existing(self.repository.as_ref(), &params.name).await?;
        product.set_current_amount(params.amount)?;

        lookup::save_and_reload(self.repository.as_ref(), &product).await
    }

    async fn set_min_amount(&self, params: SetAmountParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Setting minimum amount of {} to {}",
            params.name, params.amount
        ));

        let mut product = lookup::find_existing(self.repository.as_ref(), &params.name).await?;
        product.set_min_amount(params.amount)?;

        lookup::save_and_reload(self.repository.as_ref(), &product).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use std::sync::Mutex;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete_by_name(&self, name: &str) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_repo(product: Product) -> MockProductRepo {
        let stored = Arc::new(Mutex::new(product));
        let mut mock_repo = MockProductRepo::new();

        let lookup = stored.clone();
        mock_repo
            .expect_find_by_name()
            .returning(move |_| Ok(Some(lookup.lock().unwrap().clone())));

        mock_repo.expect_save().returning(move |product| {
            *stored.lock().unwrap() = product.clone();
            Ok(())
        });

        mock_repo
    }

    #[tokio::test]
    async fn should_set_current_amount() {
        let use_case = UpdateStockUseCaseImpl {
            repository: Arc::new(stored_repo(Product::new("Eggs".to_string()).unwrap())),
            logger: mock_logger(),
        };

        let product = use_case
            .set_current_amount(SetAmountParams {
                name: "Eggs".to_string(),
                amount: 6,
            })
            .await
            .unwrap();

        assert_eq!(product.current_amount, Some(6));
        assert_eq!(product.min_amount, Some(0));
    }

    #[tokio::test]
    async fn should_set_min_amount_and_derive_requirement() {
        let use_case = UpdateStockUseCaseImpl {
            repository: Arc::new(stored_repo(Product::new("Eggs".to_string()).unwrap())),
            logger: mock_logger(),
        };

        let product = use_case
            .set_min_amount(SetAmountParams {
                name: "Eggs".to_string(),
                amount: 12,
            })
            .await
            .unwrap();

        assert_eq!(product.min_amount, Some(12));
        assert_eq!(product.required_amount(), Some(12));
    }

    #[tokio::test]
    async fn should_reject_negative_amount_without_saving() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_name()
            .returning(|name| Ok(Some(Product::new(name.to_string()).unwrap())));
        mock_repo.expect_save().never();

        let use_case = UpdateStockUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .set_current_amount(SetAmountParams {
                name: "Eggs".to_string(),
                amount: -2,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NegativeAmount));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_name().returning(|_| Ok(None));

        let use_case = UpdateStockUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .set_min_amount(SetAmountParams {
                name: "Eggs".to_string(),
                amount: 3,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
