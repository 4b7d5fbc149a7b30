/// Session lifecycle: issuance, validation, invalidation, and cleanup.
use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::config::JwtConfig;
use crate::db::SessionRepository;
use crate::error::{AppError, Result};
use crate::models::session::{NewSession, SessionView, UserSession};
use crate::security::jwt::{JwtCodec, TOKEN_TYPE_ACCESS, TOKEN_TYPE_REFRESH};

pub struct SessionService {
    sessions: Arc<dyn SessionRepository>,
    jwt: JwtCodec,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl SessionService {
    pub fn new(sessions: Arc<dyn SessionRepository>, config: &JwtConfig) -> Self {
        Self {
            sessions,
            jwt: JwtCodec::new(&config.secret),
            access_ttl: Duration::seconds(config.access_token_ttl_secs),
            refresh_ttl: Duration::seconds(config.refresh_token_ttl_secs),
        }
    }

    /// Issue an access/refresh token pair and persist the session row.
    pub async fn create_session(&self, user_id: i64) -> Result<UserSession> {
        let access_token = self
            .jwt
            .generate(user_id, self.access_ttl, TOKEN_TYPE_ACCESS)?;
        let refresh_token = self
            .jwt
            .generate(user_id, self.refresh_ttl, TOKEN_TYPE_REFRESH)?;

        self.sessions
            .create(NewSession {
                user_id,
                access_token,
                refresh_token,
                expires_at: Utc::now() + self.access_ttl,
            })
            .await
    }

    /// Look up the session row; lapsed sessions are purged and reported as
    /// expired, so a second validation attempt fails with not-found.
    pub async fn validate_session(&self, access_token: &str) -> Result<SessionView> {
        let session = self
            .sessions
            .find_by_access_token(access_token)
            .await?
            .ok_or_else(|| AppError::NotFound("user session not found".to_string()))?;

        if session.is_expired(Utc::now()) {
            if let Err(err) = self.sessions.delete_by_access_token(access_token).await {
                tracing::warn!("failed to purge expired session: {}", err);
            }
            return Err(AppError::SessionExpired);
        }

        Ok(SessionView::from(&session))
    }

    pub async fn invalidate_session(&self, access_token: &str) -> Result<()> {
        let deleted = self.sessions.delete_by_access_token(access_token).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("session not found".to_string()));
        }
        Ok(())
    }

    pub async fn cleanup_expired(&self) -> Result<u64> {
        self.sessions.delete_expired(Utc::now()).await
    }

    /// Authentication gate: the bearer token must be a cryptographically
    /// valid access token AND a live session row must still exist for it,
    /// so logout invalidates tokens that would otherwise verify.
    pub async fn authenticate(&self, access_token: &str) -> Result<i64> {
        self.validate_session(access_token)
            .await
            .map_err(|err| match err {
                AppError::SessionExpired => AppError::SessionExpired,
                AppError::NotFound(_) => {
                    AppError::Unauthorized("Invalid or expired session".to_string())
                }
                other => other,
            })?;

        let claims = self.jwt.verify(access_token)?;
        if claims.token_type != TOKEN_TYPE_ACCESS || claims.user_id < 1 {
            return Err(AppError::Unauthorized("Invalid token".to_string()));
        }

        Ok(claims.user_id)
    }
}
