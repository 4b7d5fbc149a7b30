/// Database access layer.
///
/// One repository trait per entity with a single Postgres adapter each.
/// Adapters hold the writer/reader pool pair: every mutation goes through
/// the writer, list/get queries go through the reader (which may be a
/// replica and is therefore only eventually consistent with the writer).
pub mod city_repo;
pub mod delivery_type_repo;
pub mod item_type_repo;
pub mod order_repo;
pub mod session_repo;
pub mod store_repo;
pub mod user_repo;
pub mod zone_repo;

pub use city_repo::{CityRepository, PgCityRepository};
pub use delivery_type_repo::{DeliveryTypeRepository, PgDeliveryTypeRepository};
pub use item_type_repo::{ItemTypeRepository, PgItemTypeRepository};
pub use order_repo::{OrderRepository, PgOrderRepository};
pub use session_repo::{PgSessionRepository, SessionRepository};
pub use store_repo::{PgStoreRepository, StoreRepository};
pub use user_repo::{PgUserRepository, UserRepository};
pub use zone_repo::{PgZoneRepository, ZoneRepository};

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// Writer/reader pool pair for the primary/replica split.
#[derive(Clone)]
pub struct DbPools {
    pub writer: PgPool,
    pub reader: PgPool,
}

impl DbPools {
    /// Connect both pools and verify connectivity.
    ///
    /// When the read URL equals the write URL the writer pool is shared so a
    /// single-node deployment opens only one pool.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let writer = build_pool(&config.write_url, config).await?;

        let reader = if config.read_url == config.write_url {
            writer.clone()
        } else {
            build_pool(&config.read_url, config).await?
        };

        sqlx::query("SELECT 1").execute(&writer).await?;
        sqlx::query("SELECT 1").execute(&reader).await?;

        Ok(Self { writer, reader })
    }
}

async fn build_pool(url: &str, config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(url)
        .await
}
