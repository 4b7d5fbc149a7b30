/// Order persistence.
use async_trait::async_trait;

use crate::db::DbPools;
use crate::error::Result;
use crate::models::order::{NewOrder, Order, OrderListFilter, OrderStatus};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: NewOrder) -> Result<Order>;

    /// Soft-deleted orders are invisible.
    async fn find_by_consignment_id(&self, consignment_id: &str) -> Result<Option<Order>>;

    /// Returns the requested page plus the total matching row count.
    async fn list(&self, filter: &OrderListFilter) -> Result<(Vec<Order>, i64)>;

    /// Full-row update; returns the number of rows affected.
    async fn update(&self, order: &Order) -> Result<u64>;

    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<u64>;

    /// Soft delete; returns the number of rows affected.
    async fn delete(&self, id: i64) -> Result<u64>;
}

pub struct PgOrderRepository {
    pools: DbPools,
}

impl PgOrderRepository {
    pub fn new(pools: DbPools) -> Self {
        Self { pools }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order> {
        let created = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (
                consignment_id, user_id, store_id, merchant_order_id,
                recipient_name, recipient_phone, recipient_address,
                recipient_city, recipient_zone, recipient_area,
                order_type, delivery_type_id, item_type, item_quantity,
                item_weight, item_description, special_instruction,
                order_amount, amount_to_collect, delivery_fee, cod_fee,
                promo_discount, discount, total_fee, order_status
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25
            )
            RETURNING *
            "#,
        )
        .bind(&order.consignment_id)
        .bind(order.user_id)
        .bind(order.store_id)
        .bind(&order.merchant_order_id)
        .bind(&order.recipient_name)
        .bind(&order.recipient_phone)
        .bind(&order.recipient_address)
        .bind(order.recipient_city)
        .bind(order.recipient_zone)
        .bind(&order.recipient_area)
        .bind(order.order_type)
        .bind(order.delivery_type_id)
        .bind(order.item_type)
        .bind(order.item_quantity)
        .bind(order.item_weight)
        .bind(&order.item_description)
        .bind(&order.special_instruction)
        .bind(order.order_amount)
        .bind(order.amount_to_collect)
        .bind(order.delivery_fee)
        .bind(order.cod_fee)
        .bind(order.promo_discount)
        .bind(order.discount)
        .bind(order.total_fee)
        .bind(order.order_status)
        .fetch_one(&self.pools.writer)
        .await?;

        Ok(created)
    }

    async fn find_by_consignment_id(&self, consignment_id: &str) -> Result<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE consignment_id = $1 AND deleted_at IS NULL",
        )
        .bind(consignment_id)
        .fetch_optional(&self.pools.reader)
        .await?;

        Ok(order)
    }

    async fn list(&self, filter: &OrderListFilter) -> Result<(Vec<Order>, i64)> {
        let total: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM orders
            WHERE deleted_at IS NULL
              AND user_id = $1
              AND ($2::order_status IS NULL OR order_status = $2)
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.order_status)
        .fetch_one(&self.pools.reader)
        .await?;

        let offset = (filter.page - 1) * filter.per_page;
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT * FROM orders
            WHERE deleted_at IS NULL
              AND user_id = $1
              AND ($2::order_status IS NULL OR order_status = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.order_status)
        .bind(filter.per_page)
        .bind(offset)
        .fetch_all(&self.pools.reader)
        .await?;

        Ok((orders, total.0))
    }

    async fn update(&self, order: &Order) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE orders SET
                merchant_order_id = $2,
                recipient_name = $3,
                recipient_phone = $4,
                recipient_address = $5,
                item_weight = $6,
                item_description = $7,
                special_instruction = $8,
                order_amount = $9,
                amount_to_collect = $10,
                delivery_fee = $11,
                cod_fee = $12,
                total_fee = $13,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(order.id)
        .bind(&order.merchant_order_id)
        .bind(&order.recipient_name)
        .bind(&order.recipient_phone)
        .bind(&order.recipient_address)
        .bind(order.item_weight)
        .bind(&order.item_description)
        .bind(&order.special_instruction)
        .bind(order.order_amount)
        .bind(order.amount_to_collect)
        .bind(order.delivery_fee)
        .bind(order.cod_fee)
        .bind(order.total_fee)
        .execute(&self.pools.writer)
        .await?;

        Ok(result.rows_affected())
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE orders SET order_status = $2, updated_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .bind(status)
        .execute(&self.pools.writer)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE orders SET deleted_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pools.writer)
        .await?;

        Ok(result.rows_affected())
    }
}
