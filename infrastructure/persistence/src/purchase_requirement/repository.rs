use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::purchase_requirement::model::PurchaseRequirement;
use business::domain::purchase_requirement::repository::PurchaseRequirementRepository;

use super::entity::PurchaseRequirementEntity;
use crate::error::to_repository_error;

pub struct PurchaseRequirementRepositoryPostgres {
    pool: PgPool,
}

impl PurchaseRequirementRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PurchaseRequirementRepository for PurchaseRequirementRepositoryPostgres {
    async fn find_max_time(&self) -> Result<Option<i64>, RepositoryError> {
        // MAX over an empty table yields a single NULL row
        sqlx::query_scalar::<_, Option<i64>>(
            "SELECT MAX(time) FROM product_purchase_requirements",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| to_repository_error("purchase_requirements.find_max_time", e))
    }

    async fn find_by_time(&self, time: i64) -> Result<Vec<PurchaseRequirement>, RepositoryError> {
        let entities = sqlx::query_as::<_, PurchaseRequirementEntity>(
            "SELECT id, name, amount, time FROM product_purchase_requirements WHERE time = $1 ORDER BY name",
        )
        .bind(time)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| to_repository_error("purchase_requirements.find_by_time", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, requirement: &PurchaseRequirement) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO product_purchase_requirements (id, name, amount, time)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                amount = EXCLUDED.amount"#,
        )
        .bind(requirement.id)
        .bind(&requirement.name)
        .bind(requirement.amount)
        .bind(requirement.time)
        .execute(&self.pool)
        .await
        .map_err(|e| to_repository_error("purchase_requirements.save", e))?;

        Ok(())
    }
}
