use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::NegativeAmount => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.negative_amount",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::UpdateFailed => (
                StatusCode::CONFLICT,
                "Conflict",
                "product.update_failed",
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, ErrorResponse::json(name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_not_found_to_404() {
        let (status, json) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "product.not_found");
    }

    #[test]
    fn should_map_update_failure_to_conflict() {
        let (status, _) = ProductError::UpdateFailed.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn should_map_validation_errors_to_400() {
        assert_eq!(
            ProductError::NameEmpty.into_error_response().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProductError::NegativeAmount.into_error_response().0,
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
    }
}
