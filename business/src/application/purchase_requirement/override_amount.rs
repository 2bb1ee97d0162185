use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::purchase_requirement::errors::PurchaseRequirementError;
use crate::domain::purchase_requirement::model::PurchaseRequirement;
use crate::domain::purchase_requirement::repository::PurchaseRequirementRepository;
use crate::domain::purchase_requirement::use_cases::override_amount::{
    OverrideAmountParams, OverrideAmountUseCase,
};
use crate::domain::shared::time::Clock;

pub struct OverrideAmountUseCaseImpl {
    pub repository: Arc<dyn PurchaseRequirementRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl OverrideAmountUseCase for OverrideAmountUseCaseImpl {
    async fn execute(
        &self,
        params: OverrideAmountParams,
    ) -> Result<PurchaseRequirement, PurchaseRequirementError> {
        self.logger.info(&format!(
            "Overriding purchase amount of {} to {}",
            params.name, params.amount
        ));

        let requirement = match self.repository.find_max_time().await? {
            // No report yet: start one holding only this entry
            None => {
                let time = self.clock.now_millis();
                self.logger.debug(&format!(
                    "No purchase requirements generated yet, starting report at {}",
                    time
                ));
                PurchaseRequirement::new(params.name, params.amount, time)?
            }
            Some(latest) => {
                let existing = self
                    .repository
                    .find_by_time(latest)
                    .await?
                    .into_iter()
                    .find(|r| r.name == params.name);

                match existing {
                    Some(mut requirement) => {
                        requirement.set_amount(params.amount)?;
                        requirement
                    }
                    None => PurchaseRequirement::new(params.name, params.amount, latest)?,
                }
            }
        };

        self.repository.save(&requirement).await?;

        self.logger.info(&format!(
            "Purchase amount of {} set to {} in report {}",
            requirement.name, requirement.amount, requirement.time
        ));
        Ok(requirement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use chrono::{DateTime, TimeZone, Utc};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub RequirementRepo {}

        #[async_trait]
        impl PurchaseRequirementRepository for RequirementRepo {
            async fn find_max_time(&self) -> Result<Option<i64>, RepositoryError>;
            async fn find_by_time(&self, time: i64) -> Result<Vec<PurchaseRequirement>, RepositoryError>;
            async fn save(&self, requirement: &PurchaseRequirement) -> Result<(), RepositoryError>;
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

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.timestamp_millis_opt(self.0).unwrap()
        }
    }

    const NOW: i64 = 1_700_000_500_000;
    const LATEST: i64 = 1_700_000_000_000;

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case(mock_repo: MockRequirementRepo) -> OverrideAmountUseCaseImpl {
        OverrideAmountUseCaseImpl {
            repository: Arc::new(mock_repo),
            clock: Arc::new(FixedClock(NOW)),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_start_report_at_current_time_when_none_generated() {
        let mut mock_repo = MockRequirementRepo::new();
        mock_repo.expect_find_max_time().returning(|| Ok(None));
        mock_repo.expect_find_by_time().never();
        mock_repo
            .expect_save()
            .withf(|r| r.name == "Milk" && r.amount == 4 && r.time == NOW)
            .times(1)
            .returning(|_| Ok(()));

        let requirement = use_case(mock_repo)
            .execute(OverrideAmountParams {
                name: "Milk".to_string(),
                amount: 4,
            })
            .await
            .unwrap();

        assert_eq!(requirement.time, NOW);
    }

    #[tokio::test]
    async fn should_amend_existing_entry_in_latest_report() {
        let existing_id = Uuid::new_v4();
        let mut mock_repo = MockRequirementRepo::new();
        mock_repo.expect_find_max_time().returning(|| Ok(Some(LATEST)));
        mock_repo.expect_find_by_time().returning(move |time| {
            Ok(vec![
                PurchaseRequirement::from_repository(Uuid::new_v4(), "Bread".to_string(), 1, time),
                PurchaseRequirement::from_repository(existing_id, "Milk".to_string(), 2, time),
            ])
        });
        mock_repo
            .expect_save()
            .withf(move |r| r.id == existing_id && r.amount == 10 && r.time == LATEST)
            .times(1)
            .returning(|_| Ok(()));

        let requirement = use_case(mock_repo)
            .execute(OverrideAmountParams {
                name: "Milk".to_string(),
                amount: 10,
            })
            .await
            .unwrap();

        assert_eq!(requirement.id, existing_id);
        assert_eq!(requirement.amount, 10);
    }

    #[tokio::test]
    async fn should_add_entry_to_latest_report_when_product_absent() {
        let mut mock_repo = MockRequirementRepo::new();
        mock_repo.expect_find_max_time().returning(|| Ok(Some(LATEST)));
        mock_repo.expect_find_by_time().returning(|time| {
            Ok(vec![PurchaseRequirement::from_repository(
                Uuid::new_v4(),
                "Bread".to_string(),
                1,
                time,
            )])
        });
        mock_repo
            .expect_save()
            .withf(|r| r.name == "Milk" && r.amount == 7 && r.time == LATEST)
            .times(1)
            .returning(|_| Ok(()));

        let requirement = use_case(mock_repo)
            .execute(OverrideAmountParams {
                name: "Milk".to_string(),
                amount: 7,
            })
            .await
            .unwrap();

        assert_eq!(requirement.time, LATEST);
    }

    #[tokio::test]
    async fn should_reject_negative_override() {
        let mut mock_repo = MockRequirementRepo::new();
        mock_repo.expect_find_max_time().returning(|| Ok(Some(LATEST)));
        mock_repo.expect_find_by_time().returning(|time| {
            Ok(vec![PurchaseRequirement::from_repository(
                Uuid::new_v4(),
                "Milk".to_string(),
                2,
                time,
            )])
        });
        mock_repo.expect_save().never();

        let result = use_case(mock_repo)
            .execute(OverrideAmountParams {
                name: "Milk".to_string(),
                amount: -1,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            PurchaseRequirementError::NegativeAmount
        ));
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let mut mock_repo = MockRequirementRepo::new();
        mock_repo.expect_find_max_time().returning(|| Ok(None));
        mock_repo.expect_save().never();

        let result = use_case(mock_repo)
            .execute(OverrideAmountParams {
                name: "  ".to_string(),
                amount: 1,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            PurchaseRequirementError::NameEmpty
        ));
    }
}
