/// User entity and auth request/response types.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;
use crate::validators::{self, required_message, FieldErrors};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserCreateRequest {
    pub email: String,
    pub password: String,
}

impl UserCreateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        validate_credentials_shape(&self.email, &self.password, &mut errors);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserUpdateRequest {
    pub email: String,
    pub password: String,
}

impl UserUpdateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        validate_credentials_shape(&self.email, &self.password, &mut errors);
        errors.into_result()
    }
}

fn validate_credentials_shape(email: &str, password: &str, errors: &mut FieldErrors) {
    if email.trim().is_empty() {
        errors.add("email", required_message("email"));
    } else if !validators::validate_email(email.trim()) {
        errors.add("email", "The email must be a valid email address.");
    }
    if password.is_empty() {
        errors.add("password", required_message("password"));
    } else if password.len() < 6 {
        errors.add("password", "The password must be at least 6 characters.");
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        if self.email.trim().is_empty() {
            errors.add("email", required_message("email"));
        }
        if self.password.is_empty() {
            errors.add("password", required_message("password"));
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_rejects_short_password_and_bad_email() {
        let req = UserCreateRequest {
            email: "nope".to_string(),
            password: "abc".to_string(),
        };
        let err = req.validate().unwrap_err();
        match err {
            AppError::Validation(fields) => {
                assert!(fields.messages_for("email").is_some());
                assert!(fields.messages_for("password").is_some());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: 1,
            email: "merchant@example.com".to_string(),
            password_hash: "secret-hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password_hash"));
    }
}
