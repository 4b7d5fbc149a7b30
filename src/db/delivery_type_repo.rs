/// Delivery type persistence.
use async_trait::async_trait;

use crate::db::DbPools;
use crate::error::Result;
use crate::models::DeliveryType;

#[async_trait]
pub trait DeliveryTypeRepository: Send + Sync {
    async fn create(&self, name: &str) -> Result<DeliveryType>;
    async fn find_by_id(&self, id: i64) -> Result<Option<DeliveryType>>;
    async fn find_by_name(&self, name: &str) -> Result<Option<DeliveryType>>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<DeliveryType>>;
    async fn update(&self, id: i64, name: &str) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<u64>;
}

pub struct PgDeliveryTypeRepository {
    pools: DbPools,
}

impl PgDeliveryTypeRepository {
    pub fn new(pools: DbPools) -> Self {
        Self { pools }
    }
}

#[async_trait]
impl DeliveryTypeRepository for PgDeliveryTypeRepository {
    async fn create(&self, name: &str) -> Result<DeliveryType> {
        let delivery_type = sqlx::query_as::<_, DeliveryType>(
            "INSERT INTO delivery_types (name) VALUES ($1) RETURNING *",
        )
        .bind(name)
        .fetch_one(&self.pools.writer)
        .await?;

        Ok(delivery_type)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<DeliveryType>> {
        let delivery_type = sqlx::query_as::<_, DeliveryType>(
            "SELECT * FROM delivery_types WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pools.reader)
        .await?;

        Ok(delivery_type)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<DeliveryType>> {
        let delivery_type = sqlx::query_as::<_, DeliveryType>(
            "SELECT * FROM delivery_types WHERE name = $1 AND deleted_at IS NULL",
        )
        .bind(name)
        .fetch_optional(&self.pools.reader)
        .await?;

        Ok(delivery_type)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<DeliveryType>> {
        let delivery_types = sqlx::query_as::<_, DeliveryType>(
            r#"
            SELECT * FROM delivery_types
            WHERE deleted_at IS NULL
            ORDER BY name ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pools.reader)
        .await?;

        Ok(delivery_types)
    }

    async fn update(&self, id: i64, name: &str) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE delivery_types SET name = $2, updated_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .bind(name)
        .execute(&self.pools.writer)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE delivery_types SET deleted_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pools.writer)
        .await?;

        Ok(result.rows_affected())
    }
}
