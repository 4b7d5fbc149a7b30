/// JWT token generation and validation using HS256 (HMAC with SHA-256).
///
/// Both access and refresh tokens are signed with the same shared secret and
/// differ only in lifetime and `token_type` claim. The codec is constructed
/// once from config and injected wherever tokens are produced or checked.
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const ISSUER: &str = "courier-auth";

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID, stringified)
    pub sub: String,
    /// Numeric user ID
    pub user_id: i64,
    /// Issuer
    pub iss: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token type: "access" or "refresh"
    pub token_type: String,
}

#[derive(Clone)]
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtCodec {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign a token for `user_id` expiring `ttl` from now.
    pub fn generate(
        &self,
        user_id: i64,
        ttl: Duration,
        token_type: &str,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            user_id,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            token_type: token_type.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::TokenGeneration(e.to_string()))
    }

    /// Verify signature, algorithm, issuer, and expiry claim.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::SessionExpired,
                _ => AppError::Unauthorized("Invalid token".to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> JwtCodec {
        JwtCodec::new("test-secret")
    }

    #[test]
    fn round_trip_preserves_claims() {
        let token = codec()
            .generate(42, Duration::hours(1), TOKEN_TYPE_ACCESS)
            .unwrap();
        let claims = codec().verify(&token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.token_type, TOKEN_TYPE_ACCESS);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_expired_token() {
        let token = codec()
            .generate(7, Duration::seconds(-120), TOKEN_TYPE_ACCESS)
            .unwrap();
        let err = codec().verify(&token).unwrap_err();
        assert!(matches!(err, AppError::SessionExpired));
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = codec()
            .generate(7, Duration::hours(1), TOKEN_TYPE_ACCESS)
            .unwrap();
        let other = JwtCodec::new("different-secret");
        let err = other.verify(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn rejects_garbage() {
        let err = codec().verify("not.a.token").unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
