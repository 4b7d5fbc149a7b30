/// Zone persistence.
use async_trait::async_trait;

use crate::db::DbPools;
use crate::error::Result;
use crate::models::Zone;

#[async_trait]
pub trait ZoneRepository: Send + Sync {
    async fn create(&self, city_id: i64, name: &str) -> Result<Zone>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Zone>>;
    /// Zone names are unique within a city, not globally.
    async fn find_by_name_in_city(&self, city_id: i64, name: &str) -> Result<Option<Zone>>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Zone>>;
    async fn list_by_city(&self, city_id: i64, limit: i64, offset: i64) -> Result<Vec<Zone>>;
    async fn update(&self, zone: &Zone) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<u64>;
}

pub struct PgZoneRepository {
    pools: DbPools,
}

impl PgZoneRepository {
    pub fn new(pools: DbPools) -> Self {
        Self { pools }
    }
}

#[async_trait]
impl ZoneRepository for PgZoneRepository {
    async fn create(&self, city_id: i64, name: &str) -> Result<Zone> {
        let zone = sqlx::query_as::<_, Zone>(
            r#"
            INSERT INTO zones (city_id, name)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(city_id)
        .bind(name)
        .fetch_one(&self.pools.writer)
        .await?;

        Ok(zone)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Zone>> {
        let zone = sqlx::query_as::<_, Zone>(
            "SELECT * FROM zones WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pools.reader)
        .await?;

        Ok(zone)
    }

    async fn find_by_name_in_city(&self, city_id: i64, name: &str) -> Result<Option<Zone>> {
        let zone = sqlx::query_as::<_, Zone>(
            "SELECT * FROM zones WHERE city_id = $1 AND name = $2 AND deleted_at IS NULL",
        )
        .bind(city_id)
        .bind(name)
        .fetch_optional(&self.pools.reader)
        .await?;

        Ok(zone)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Zone>> {
        let zones = sqlx::query_as::<_, Zone>(
            r#"
            SELECT * FROM zones
            WHERE deleted_at IS NULL
            ORDER BY name ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pools.reader)
        .await?;

        Ok(zones)
    }

    async fn list_by_city(&self, city_id: i64, limit: i64, offset: i64) -> Result<Vec<Zone>> {
        let zones = sqlx::query_as::<_, Zone>(
            r#"
            SELECT * FROM zones
            WHERE city_id = $1 AND deleted_at IS NULL
            ORDER BY name ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(city_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pools.reader)
        .await?;

        Ok(zones)
    }

    async fn update(&self, zone: &Zone) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE zones SET name = $2, updated_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(zone.id)
        .bind(&zone.name)
        .execute(&self.pools.writer)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE zones SET deleted_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pools.writer)
        .await?;

        Ok(result.rows_affected())
    }
}
