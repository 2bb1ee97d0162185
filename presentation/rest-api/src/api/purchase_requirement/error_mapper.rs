use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::purchase_requirement::errors::PurchaseRequirementError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PurchaseRequirementError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            PurchaseRequirementError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "purchase_requirement.name_empty",
            ),
            PurchaseRequirementError::NegativeAmount => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "purchase_requirement.negative_amount",
            ),
            PurchaseRequirementError::Missing => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "purchase_requirement.missing",
            ),
            PurchaseRequirementError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, ErrorResponse::json(name, message))
    }
}
