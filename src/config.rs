/// Configuration management for the courier service.
///
/// All settings come from environment variables (optionally loaded from a
/// `.env` file by `main`). The config is constructed once at startup and
/// passed into components explicitly; nothing reads the environment after
/// boot.
use serde::Deserialize;

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub session: SessionConfig,
}

/// Application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// Database configuration for the writer/reader pool pair.
///
/// `read_url` may point at a replica; it falls back to the writer URL when
/// unset so single-node deployments need just one variable.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Primary (write) connection URL
    pub write_url: String,
    /// Replica (read) connection URL
    pub read_url: String,
    /// Max connections per pool
    pub max_connections: u32,
    /// Min idle connections per pool
    pub min_connections: u32,
    /// Pool acquire timeout in seconds
    pub acquire_timeout_secs: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_secs: u64,
    /// Max connection lifetime in seconds
    pub max_lifetime_secs: u64,
}

/// Token signing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// HMAC shared secret for HS256 signing
    pub secret: String,
    /// Access token lifetime in seconds
    pub access_token_ttl_secs: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_ttl_secs: i64,
}

/// Session housekeeping configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Interval between expired-session sweeps, in seconds
    pub cleanup_interval_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let write_url = require_var("DATABASE_WRITE_URL")?;
        let read_url =
            std::env::var("DATABASE_READ_URL").unwrap_or_else(|_| write_url.clone());

        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env_or("APP_PORT", 8080),
            },
            database: DatabaseConfig {
                write_url,
                read_url,
                max_connections: env_or("DB_MAX_CONNECTIONS", 20),
                min_connections: env_or("DB_MIN_CONNECTIONS", 5),
                acquire_timeout_secs: env_or("DB_ACQUIRE_TIMEOUT_SECS", 10),
                idle_timeout_secs: env_or("DB_IDLE_TIMEOUT_SECS", 600),
                max_lifetime_secs: env_or("DB_MAX_LIFETIME_SECS", 1800),
            },
            jwt: JwtConfig {
                secret: require_var("JWT_SECRET")?,
                access_token_ttl_secs: env_or("JWT_ACCESS_TOKEN_TTL_SECS", 3600),
                refresh_token_ttl_secs: env_or("JWT_REFRESH_TOKEN_TTL_SECS", 30 * 24 * 3600),
            },
            session: SessionConfig {
                cleanup_interval_secs: env_or("SESSION_CLEANUP_INTERVAL_SECS", 3600),
            },
        })
    }
}

fn require_var(name: &str) -> Result<String, String> {
    std::env::var(name).map_err(|_| format!("{} environment variable not set", name))
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
