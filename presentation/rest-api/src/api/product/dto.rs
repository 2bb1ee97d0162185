use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty). An existing product with this name is replaced.
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Whether the product is excluded from purchase requirements
    #[oai(skip_serializing_if_is_none)]
    pub blocked: Option<bool>,
    /// Stock currently held
    #[oai(skip_serializing_if_is_none)]
    pub current_amount: Option<i64>,
    /// Stock level below which the product should be reordered
    #[oai(skip_serializing_if_is_none)]
    pub min_amount: Option<i64>,
    /// Amount that would be requested if a report were generated now
    #[oai(skip_serializing_if_is_none)]
    pub required_amount: Option<i64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let required_amount = product.required_amount();
        Self {
            id: product.id.to_string(),
            name: product.name,
            blocked: product.blocked,
            current_amount: product.current_amount,
            min_amount: product.min_amount,
            required_amount,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
