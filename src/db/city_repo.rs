/// City persistence.
use async_trait::async_trait;

use crate::db::DbPools;
use crate::error::Result;
use crate::models::City;

#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn create(&self, name: &str, base_delivery_fee: f64) -> Result<City>;
    async fn find_by_id(&self, id: i64) -> Result<Option<City>>;
    async fn find_by_name(&self, name: &str) -> Result<Option<City>>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<City>>;
    async fn update(&self, city: &City) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<u64>;
}

pub struct PgCityRepository {
    pools: DbPools,
}

impl PgCityRepository {
    pub fn new(pools: DbPools) -> Self {
        Self { pools }
    }
}

#[async_trait]
impl CityRepository for PgCityRepository {
    async fn create(&self, name: &str, base_delivery_fee: f64) -> Result<City> {
        let city = sqlx::query_as::<_, City>(
            r#"
            INSERT INTO cities (name, base_delivery_fee)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(base_delivery_fee)
        .fetch_one(&self.pools.writer)
        .await?;

        Ok(city)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<City>> {
        let city = sqlx::query_as::<_, City>(
            "SELECT * FROM cities WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pools.reader)
        .await?;

        Ok(city)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<City>> {
        let city = sqlx::query_as::<_, City>(
            "SELECT * FROM cities WHERE name = $1 AND deleted_at IS NULL",
        )
        .bind(name)
        .fetch_optional(&self.pools.reader)
        .await?;

        Ok(city)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<City>> {
        let cities = sqlx::query_as::<_, City>(
            r#"
            SELECT * FROM cities
            WHERE deleted_at IS NULL
            ORDER BY name ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pools.reader)
        .await?;

        Ok(cities)
    }

    async fn update(&self, city: &City) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE cities SET name = $2, base_delivery_fee = $3, updated_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(city.id)
        .bind(&city.name)
        .bind(city.base_delivery_fee)
        .execute(&self.pools.writer)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE cities SET deleted_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pools.writer)
        .await?;

        Ok(result.rows_affected())
    }
}
