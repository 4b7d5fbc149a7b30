/// Session persistence, keyed by access token.
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::db::DbPools;
use crate::error::Result;
use crate::models::session::{NewSession, UserSession};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: NewSession) -> Result<UserSession>;

    /// Token validation is on the hot path of every authenticated request,
    /// so lookups use the reader pool.
    async fn find_by_access_token(&self, access_token: &str) -> Result<Option<UserSession>>;

    /// Returns the number of rows deleted (0 when the token is unknown).
    async fn delete_by_access_token(&self, access_token: &str) -> Result<u64>;

    /// Bulk-delete every session expired at `now`; returns the count.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64>;
}

pub struct PgSessionRepository {
    pools: DbPools,
}

impl PgSessionRepository {
    pub fn new(pools: DbPools) -> Self {
        Self { pools }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create(&self, session: NewSession) -> Result<UserSession> {
        let created = sqlx::query_as::<_, UserSession>(
            r#"
            INSERT INTO user_sessions (user_id, access_token, refresh_token, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(session.user_id)
        .bind(&session.access_token)
        .bind(&session.refresh_token)
        .bind(session.expires_at)
        .fetch_one(&self.pools.writer)
        .await?;

        Ok(created)
    }

    async fn find_by_access_token(&self, access_token: &str) -> Result<Option<UserSession>> {
        let session = sqlx::query_as::<_, UserSession>(
            "SELECT * FROM user_sessions WHERE access_token = $1",
        )
        .bind(access_token)
        .fetch_optional(&self.pools.reader)
        .await?;

        Ok(session)
    }

    async fn delete_by_access_token(&self, access_token: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM user_sessions WHERE access_token = $1")
            .bind(access_token)
            .execute(&self.pools.writer)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query("DELETE FROM user_sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pools.writer)
            .await?;

        Ok(result.rows_affected())
    }
}
