use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::purchase_requirement::repository::PurchaseRequirementRepositoryPostgres;

use business::application::product::block::BlockProductUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_name::GetProductByNameUseCaseImpl;
use business::application::product::update_stock::UpdateStockUseCaseImpl;
use business::application::purchase_requirement::generate::GeneratePurchaseRequirementsUseCaseImpl;
use business::application::purchase_requirement::get_latest::GetLatestPurchaseRequirementsUseCaseImpl;
use business::application::purchase_requirement::override_amount::OverrideAmountUseCaseImpl;
use business::domain::shared::time::SystemClock;

use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::purchase_requirement::routes::PurchaseRequirementApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub purchase_requirement_api: PurchaseRequirementApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let clock = Arc::new(SystemClock);
        let health_api = HealthApi::new(pool.clone());

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let requirement_repository = Arc::new(PurchaseRequirementRepositoryPostgres::new(pool));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_name_use_case = Arc::new(GetProductByNameUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let block_use_case = Arc::new(BlockProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_stock_use_case = Arc::new(UpdateStockUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Purchase requirement use cases
        let generate_use_case = Arc::new(GeneratePurchaseRequirementsUseCaseImpl {
            product_repository,
            requirement_repository: requirement_repository.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let get_latest_use_case = Arc::new(GetLatestPurchaseRequirementsUseCaseImpl {
            repository: requirement_repository.clone(),
            logger: logger.clone(),
        });
        let override_use_case = Arc::new(OverrideAmountUseCaseImpl {
            repository: requirement_repository,
            clock,
            logger,
        });

        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_name_use_case,
            delete_use_case,
            block_use_case,
            update_stock_use_case,
        );

        let purchase_requirement_api =
            PurchaseRequirementApi::new(generate_use_case, get_latest_use_case, override_use_case);

        Self {
            health_api,
            product_api,
            purchase_requirement_api,
        }
    }
}
