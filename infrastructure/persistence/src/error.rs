use business::domain::errors::RepositoryError;

/// Maps a sqlx failure onto the domain error, logging the driver detail
/// that the domain error does not carry.
pub(crate) fn to_repository_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    let unique_violation = err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());

    if unique_violation {
        tracing::warn!(operation, error = %err, "unique constraint violated");
        RepositoryError::duplicated()
    } else {
        tracing::error!(operation, error = %err, "database query failed");
        RepositoryError::database_error()
    }
}
