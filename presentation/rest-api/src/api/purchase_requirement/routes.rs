use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::purchase_requirement::use_cases::generate::GeneratePurchaseRequirementsUseCase;
use business::domain::purchase_requirement::use_cases::get_latest::GetLatestPurchaseRequirementsUseCase;
use business::domain::purchase_requirement::use_cases::override_amount::{
    OverrideAmountParams, OverrideAmountUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::purchase_requirement::dto::{
    PurchaseRequirementReportResponse, PurchaseRequirementResponse,
};
use crate::api::tags::ApiTags;

pub struct PurchaseRequirementApi {
    generate_use_case: Arc<dyn GeneratePurchaseRequirementsUseCase>,
    get_latest_use_case: Arc<dyn GetLatestPurchaseRequirementsUseCase>,
    override_use_case: Arc<dyn OverrideAmountUseCase>,
}

impl PurchaseRequirementApi {
    pub fn new(
        generate_use_case: Arc<dyn GeneratePurchaseRequirementsUseCase>,
        get_latest_use_case: Arc<dyn GetLatestPurchaseRequirementsUseCase>,
        override_use_case: Arc<dyn OverrideAmountUseCase>,
    ) -> Self {
        Self {
            generate_use_case,
            get_latest_use_case,
            override_use_case,
        }
    }
}

/// Purchase requirement reports
///
/// A report lists every unblocked product whose current stock is below its
/// minimum, with the amount needed to reach the minimum.
#[OpenApi(prefix_path = "/v1")]
impl PurchaseRequirementApi {
    /// Generate a purchase requirement report
    ///
    /// Evaluates every product now and records the resulting report.
    #[oai(
        path = "/productPurchaseRequirements",
        method = "post",
        tag = "ApiTags::PurchaseRequirements"
    )]
    async fn generate(&self) -> ReportResponse {
        match self.generate_use_case.execute().await {
            Ok(requirements) => ReportResponse::Ok(Json(requirements.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ReportResponse::InternalError(json)
            }
        }
    }

    /// Get the latest purchase requirement report
    ///
    /// Answers 404 if no report has been generated yet.
    #[oai(
        path = "/latestProductPurchaseRequirements",
        method = "get",
        tag = "ApiTags::PurchaseRequirements"
    )]
    async fn get_latest(&self) -> ReportResponse {
        match self.get_latest_use_case.execute().await {
            Ok(requirements) => ReportResponse::Ok(Json(requirements.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ReportResponse::NotFound(json),
                    _ => ReportResponse::InternalError(json),
                }
            }
        }
    }

    /// Override the amount to purchase for a product
    ///
    /// Amends the product's entry in the latest report, adding it if absent.
    /// Starts a new report if none exists.
    #[oai(
        path = "/override/:name/:amount",
        method = "patch",
        tag = "ApiTags::PurchaseRequirements"
    )]
    async fn override_amount(&self, name: Path<String>, amount: Path<i64>) -> OverrideResponse {
        match self
            .override_use_case
            .execute(OverrideAmountParams {
                name: name.0,
                amount: amount.0,
            })
            .await
        {
            Ok(requirement) => OverrideResponse::Ok(Json(requirement.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => OverrideResponse::BadRequest(json),
                    _ => OverrideResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReportResponse {
    #[oai(status = 200)]
    Ok(Json<PurchaseRequirementReportResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum OverrideResponse {
    #[oai(status = 200)]
    Ok(Json<PurchaseRequirementResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
