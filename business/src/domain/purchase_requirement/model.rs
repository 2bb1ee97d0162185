use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::PurchaseRequirementError;
use crate::domain::product::model::Product;

/// One line of a purchase requirement report.
///
/// All entries generated together share the same `time` (epoch milliseconds),
/// which identifies the report they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequirement {
    pub id: Uuid,
    pub name: String,
    pub amount: i64,
    pub time: i64,
}

impl PurchaseRequirement {
    pub fn new(name: String, amount: i64, time: i64) -> Result<Self, PurchaseRequirementError> {
        if name.trim().is_empty() {
            return Err(PurchaseRequirementError::NameEmpty);
        }
        if amount < 0 {
            return Err(PurchaseRequirementError::NegativeAmount);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            amount,
            time,
        })
    }

    /// Builds the requirement for `product`, if it needs reordering.
    pub fn for_product(product: &Product, time: i64) -> Option<Self> {
        product.required_amount().map(|amount| Self {
            id: Uuid::new_v4(),
            name: product.name.clone(),
            amount,
            time,
        })
    }

    pub fn set_amount(&mut self, amount: i64) -> Result<(), PurchaseRequirementError> {
        if amount < 0 {
            return Err(PurchaseRequirementError::NegativeAmount);
        }
        self.amount = amount;
        Ok(())
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, name: String, amount: i64, time: i64) -> Self {
        Self {
            id,
            name,
            amount,
            time,
        }
    }
}
