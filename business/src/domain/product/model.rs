use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ProductError;

/// A stocked product that may need reordering.
///
/// Stock fields are nullable in storage. A product with any of them unset
/// never produces a purchase requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub blocked: Option<bool>,
    pub current_amount: Option<i64>,
    pub min_amount: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates an unblocked product with no stock and no minimum.
    pub fn new(name: String) -> Result<Self, ProductError> {
        if name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            blocked: Some(false),
            current_amount: Some(0),
            min_amount: Some(0),
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        blocked: Option<bool>,
        current_amount: Option<i64>,
        min_amount: Option<i64>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            blocked,
            current_amount,
            min_amount,
            created_at,
            updated_at,
        }
    }

    /// Amount to purchase so current stock reaches the minimum.
    ///
    /// `None` when the product is blocked, any stock field is unset, or the
    /// current stock already meets the minimum.
    pub fn required_amount(&self) -> Option<i64> {
        match (self.blocked, self.current_amount, self.min_amount) {
            (Some(false), Some(current), Some(min)) if current < min => Some(min - current),
            _ => None,
        }
    }

    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = Some(blocked);
        self.touch();
    }

    pub fn set_current_amount(&mut self, amount: i64) -> Result<(), ProductError> {
        if amount < 0 {
            return Err(ProductError::NegativeAmount);
        }
        self.current_amount = Some(amount);
        self.touch();
        Ok(())
    }

    pub fn set_min_amount(&mut self, amount: i64) -> Result<(), ProductError> {
        if amount < 0 {
            return Err(ProductError::NegativeAmount);
        }
        self.min_amount = Some(amount);
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product_with(blocked: Option<bool>, current: Option<i64>, min: Option<i64>) -> Product {
        let now = Utc::now();
        Product::from_repository(
            Uuid::new_v4(),
            "Coffee Beans".to_string(),
            blocked,
            current,
            min,
            now,
            now,
        )
    }

    #[test]
    fn should_create_product_with_default_stock() {
        let product = Product::new("Coffee Beans".to_string()).unwrap();

        assert_eq!(product.name, "Coffee Beans");
        assert_eq!(product.blocked, Some(false));
        assert_eq!(product.current_amount, Some(0));
        assert_eq!(product.min_amount, Some(0));
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let result = Product::new("   ".to_string());

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_require_difference_when_below_minimum() {
        let product = product_with(Some(false), Some(3), Some(10));

        assert_eq!(product.required_amount(), Some(7));
    }

    #[test]
    fn should_not_require_when_stock_equals_minimum() {
        let product = product_with(Some(false), Some(10), Some(10));

        assert_eq!(product.required_amount(), None);
    }

    #[test]
    fn should_not_require_when_blocked() {
        let product = product_with(Some(true), Some(0), Some(10));

        assert_eq!(product.required_amount(), None);
    }

    #[test]
    fn should_not_require_when_any_field_unset() {
        assert_eq!(product_with(None, Some(0), Some(10)).required_amount(), None);
        assert_eq!(product_with(Some(false), None, Some(10)).required_amount(), None);
        assert_eq!(product_with(Some(false), Some(0), None).required_amount(), None);
    }

    #[test]
    fn should_reject_negative_amounts() {
        let mut product = Product::new("Tea".to_string()).unwrap();

        assert!(matches!(
            product.set_current_amount(-1).unwrap_err(),
            ProductError::NegativeAmount
        ));
        assert!(matches!(
            product.set_min_amount(-5).unwrap_err(),
            ProductError::NegativeAmount
        ));
        assert_eq!(product.current_amount, Some(0));
        assert_eq!(product.min_amount, Some(0));
    }

    #[test]
    fn should_update_blocked_flag() {
        let mut product = Product::new("Tea".to_string()).unwrap();

        product.set_blocked(true);
        assert_eq!(product.blocked, Some(true));

        product.set_blocked(false);
        assert_eq!(product.blocked, Some(false));
    }

    proptest! {
        #[test]
        fn required_amount_restores_minimum(current in 0i64..10_000, min in 0i64..10_000) {
            let product = product_with(Some(false), Some(current), Some(min));

            match product.required_amount() {
                Some(amount) => {
                    prop_assert!(amount > 0);
                    prop_assert_eq!(current + amount, min);
                }
                None => prop_assert!(current >= min),
            }
        }

        #[test]
        fn blocked_products_never_require(current in 0i64..10_000, min in 0i64..10_000) {
            let product = product_with(Some(true), Some(current), Some(min));

            prop_assert_eq!(product.required_amount(), None);
        }
    }
}
