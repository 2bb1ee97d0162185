use sqlx::FromRow;
use uuid::Uuid;

use business::domain::purchase_requirement::model::PurchaseRequirement;

#[derive(Debug, FromRow)]
pub struct PurchaseRequirementEntity {
    pub id: Uuid,
    pub name: String,
    pub amount: i64,
    pub time: i64,
}

impl PurchaseRequirementEntity {
    pub fn into_domain(self) -> PurchaseRequirement {
        PurchaseRequirement::from_repository(self.id, self.name, self.amount, self.time)
    }
}
