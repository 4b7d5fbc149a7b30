/// Session entity: one row per issued login.
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserSession {
    pub id: i64,
    pub user_id: i64,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Insert payload for a new session row.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub user_id: i64,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Session metadata returned to callers; token values are not echoed back.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: i64,
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&UserSession> for SessionView {
    fn from(session: &UserSession) -> Self {
        Self {
            id: session.id,
            user_id: session.user_id,
            expires_at: session.expires_at,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn expiry_check_is_strict() {
        let now = Utc::now();
        let session = UserSession {
            id: 1,
            user_id: 1,
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            expires_at: now,
            created_at: now,
            updated_at: now,
        };
        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + Duration::seconds(1)));
    }

    #[test]
    fn view_omits_token_values() {
        let now = Utc::now();
        let session = UserSession {
            id: 9,
            user_id: 3,
            access_token: "token-value".to_string(),
            refresh_token: "refresh-value".to_string(),
            expires_at: now,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_string(&SessionView::from(&session)).unwrap();
        assert!(!json.contains("token-value"));
        assert!(!json.contains("refresh-value"));
    }
}
