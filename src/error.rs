/// Error types for the courier service.
///
/// One taxonomy for the whole service: repositories surface `Database`
/// untouched, services translate recognized conditions into domain variants,
/// and the actix integration renders every variant through the response
/// envelope. Errors are matched structurally, never by message text.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

use crate::response;
use crate::validators::FieldErrors;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request field validation failed; carries the field -> messages map.
    #[error("Please fix the given errors")]
    Validation(FieldErrors),

    #[error("{0}")]
    NotFound(String),

    /// Missing/invalid session, or the caller does not own the entity.
    #[error("{0}")]
    Unauthorized(String),

    /// Identical for unknown email and wrong password.
    #[error("The user credentials were incorrect.")]
    InvalidCredentials,

    #[error("Session has expired")]
    SessionExpired,

    #[error("{0}")]
    Conflict(String),

    /// A referenced foreign entity does not exist.
    #[error("{0}")]
    InvalidReference(String),

    #[error("Failed to sign token: {0}")]
    TokenGeneration(String),

    #[error("Failed to create session")]
    SessionCreation,

    #[error("{0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

/// True when a sqlx error is a Postgres unique-constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == "23505")
        .unwrap_or(false)
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_)
            | AppError::InvalidCredentials
            | AppError::SessionExpired => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InvalidReference(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::TokenGeneration(_)
            | AppError::SessionCreation
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Credential failures never carry diagnostic detail.
        let errors = match self {
            AppError::Validation(fields) => serde_json::to_value(fields).ok(),
            AppError::InvalidCredentials
            | AppError::SessionExpired
            | AppError::Unauthorized(_) => None,
            AppError::InvalidReference(message) => {
                Some(serde_json::json!([message]))
            }
            AppError::Database(err) => Some(serde_json::json!([err.to_string()])),
            AppError::Internal(detail) => Some(serde_json::json!([detail])),
            _ => None,
        };

        let message = match self {
            AppError::Database(_) | AppError::Internal(_) => "Internal server error".to_string(),
            AppError::InvalidReference(_) => "Please fix the given errors".to_string(),
            other => other.to_string(),
        };

        response::error(status, &message, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_422() {
        let mut fields = FieldErrors::new();
        fields.add("recipient_phone", "The phone number format is invalid.");
        let err = AppError::Validation(fields);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn credential_errors_share_status_and_message() {
        let err = AppError::InvalidCredentials;
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "The user credentials were incorrect.");
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = AppError::Conflict("city with name 'Dhaka' already exists".into());
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }
}
