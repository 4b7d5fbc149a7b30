/// Store persistence.
use async_trait::async_trait;

use crate::db::DbPools;
use crate::error::Result;
use crate::models::Store;

#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn create(&self, name: &str, contact_phone: &str, address: &str) -> Result<Store>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Store>>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Store>>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Store>>;
    async fn update(&self, store: &Store) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<u64>;
}

pub struct PgStoreRepository {
    pools: DbPools,
}

impl PgStoreRepository {
    pub fn new(pools: DbPools) -> Self {
        Self { pools }
    }
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn create(&self, name: &str, contact_phone: &str, address: &str) -> Result<Store> {
        let store = sqlx::query_as::<_, Store>(
            r#"
            INSERT INTO stores (name, contact_phone, address)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(contact_phone)
        .bind(address)
        .fetch_one(&self.pools.writer)
        .await?;

        Ok(store)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Store>> {
        let store = sqlx::query_as::<_, Store>(
            "SELECT * FROM stores WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pools.reader)
        .await?;

        Ok(store)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Store>> {
        let store = sqlx::query_as::<_, Store>(
            "SELECT * FROM stores WHERE name = $1 AND deleted_at IS NULL",
        )
        .bind(name)
        .fetch_optional(&self.pools.reader)
        .await?;

        Ok(store)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Store>> {
        let stores = sqlx::query_as::<_, Store>(
            r#"
            SELECT * FROM stores
            WHERE deleted_at IS NULL
            ORDER BY name ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pools.reader)
        .await?;

        Ok(stores)
    }

    async fn update(&self, store: &Store) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE stores SET name = $2, contact_phone = $3, address = $4,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(store.id)
        .bind(&store.name)
        .bind(&store.contact_phone)
        .bind(&store.address)
        .execute(&self.pools.writer)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE stores SET deleted_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pools.writer)
        .await?;

        Ok(result.rows_affected())
    }
}
