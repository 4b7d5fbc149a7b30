/// Login/logout orchestration.
use std::sync::Arc;

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::models::user::{LoginRequest, LoginResponse};
use crate::security::password;
use crate::services::SessionService;

const TOKEN_TYPE_LABEL: &str = "Bearer";

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<SessionService>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, sessions: Arc<SessionService>) -> Self {
        Self { users, sessions }
    }

    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        request.validate()?;

        let email = request.email.trim().to_lowercase();

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !password::verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let session = self
            .sessions
            .create_session(user.id)
            .await
            .map_err(|err| {
                tracing::error!(user_id = user.id, "session issuance failed: {}", err);
                AppError::SessionCreation
            })?;

        Ok(LoginResponse {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_at: session.expires_at,
            token_type: TOKEN_TYPE_LABEL.to_string(),
        })
    }

    pub async fn logout(&self, access_token: &str) -> Result<()> {
        self.sessions
            .validate_session(access_token)
            .await
            .map_err(|_| AppError::Unauthorized("Invalid access token".to_string()))?;

        self.sessions.invalidate_session(access_token).await
    }
}
