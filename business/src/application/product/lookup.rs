use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;

pub(super) async fn find_existing(
    repository: &dyn ProductRepository,
    name: &str,
) -> Result<Product, ProductError> {
    repository
        .find_by_name(name)
        .await?
        .ok_or(ProductError::NotFound)
}

/// Saves the product and reads it back by name to confirm the write.
pub(super) async fn save_and_reload(
    repository: &dyn ProductRepository,
    product: &Product,
) -> Result<Product, ProductError> {
    repository.save(product).await?;
    repository
        .find_by_name(&product.name)
        .await?
        .ok_or(ProductError::UpdateFailed)
}
