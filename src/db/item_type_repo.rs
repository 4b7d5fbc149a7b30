/// Item type persistence.
use async_trait::async_trait;

use crate::db::DbPools;
use crate::error::Result;
use crate::models::ItemType;

#[async_trait]
pub trait ItemTypeRepository: Send + Sync {
    async fn create(&self, name: &str) -> Result<ItemType>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ItemType>>;
    async fn find_by_name(&self, name: &str) -> Result<Option<ItemType>>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ItemType>>;
    async fn update(&self, id: i64, name: &str) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<u64>;
}

pub struct PgItemTypeRepository {
    pools: DbPools,
}

impl PgItemTypeRepository {
    pub fn new(pools: DbPools) -> Self {
        Self { pools }
    }
}

#[async_trait]
impl ItemTypeRepository for PgItemTypeRepository {
    async fn create(&self, name: &str) -> Result<ItemType> {
        let item_type = sqlx::query_as::<_, ItemType>(
            "INSERT INTO item_types (name) VALUES ($1) RETURNING *",
        )
        .bind(name)
        .fetch_one(&self.pools.writer)
        .await?;

        Ok(item_type)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ItemType>> {
        let item_type = sqlx::query_as::<_, ItemType>(
            "SELECT * FROM item_types WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pools.reader)
        .await?;

        Ok(item_type)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ItemType>> {
        let item_type = sqlx::query_as::<_, ItemType>(
            "SELECT * FROM item_types WHERE name = $1 AND deleted_at IS NULL",
        )
        .bind(name)
        .fetch_optional(&self.pools.reader)
        .await?;

        Ok(item_type)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ItemType>> {
        let item_types = sqlx::query_as::<_, ItemType>(
            r#"
            SELECT * FROM item_types
            WHERE deleted_at IS NULL
            ORDER BY name ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pools.reader)
        .await?;

        Ok(item_types)
    }

    async fn update(&self, id: i64, name: &str) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE item_types SET name = $2, updated_at = CURRENT_TIMESTAMP
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
            UPDATE item_types SET deleted_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pools.writer)
        .await?;

        Ok(result.rows_affected())
    }
}
