use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use crate::error::to_repository_error;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, blocked, current_amount, min_amount, created_at, updated_at FROM products ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| to_repository_error("products.get_all", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, blocked, current_amount, min_amount, created_at, updated_at FROM products WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| to_repository_error("products.find_by_name", e))?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, blocked, current_amount, min_amount, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                blocked = EXCLUDED.blocked,
                current_amount = EXCLUDED.current_amount,
                min_amount = EXCLUDED.min_amount,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.blocked)
        .bind(product.current_amount)
        .bind(product.min_amount)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| to_repository_error("products.save", e))?;

        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE name = $1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| to_repository_error("products.delete_by_name", e))?;

        Ok(result.rows_affected())
    }
}
