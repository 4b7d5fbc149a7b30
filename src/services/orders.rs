/// Order service: creation with fee computation, ownership-scoped access,
/// paginated listing, partial updates, cancellation, and deletion.
use std::sync::Arc;

use uuid::Uuid;

use crate::db::{CityRepository, OrderRepository, StoreRepository};
use crate::error::{AppError, Result};
use crate::models::order::{
    NewOrder, Order, OrderCreateRequest, OrderCreateResponse, OrderListFilter, OrderListResponse,
    OrderResponse, OrderStatus, OrderType, OrderUpdateRequest,
};
use crate::models::Pagination;

/// Base fee applied when the recipient city cannot be resolved.
pub const FALLBACK_BASE_DELIVERY_FEE: f64 = 60.0;

/// First kilogram ships at the base fee; every extra kilogram costs this much.
const WEIGHT_FREE_ALLOWANCE_KG: f64 = 1.0;
const WEIGHT_FEE_PER_EXTRA_KG: f64 = 10.0;

/// Cash-on-delivery commission: 1% of the order amount.
const COD_FEE_RATE: f64 = 0.01;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_LENGTH: i64 = 10;
pub const MAX_PAGE_LENGTH: i64 = 100;

/// Round to currency precision (2 decimals, half away from zero).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn delivery_fee(base_fee: f64, item_weight: f64) -> f64 {
    let extra_kg = (item_weight - WEIGHT_FREE_ALLOWANCE_KG).max(0.0);
    round2(base_fee + extra_kg * WEIGHT_FEE_PER_EXTRA_KG)
}

pub fn cod_fee(order_amount: f64) -> f64 {
    round2(order_amount * COD_FEE_RATE)
}

pub fn total_fee(delivery_fee: f64, cod_fee: f64, promo_discount: f64, discount: f64) -> f64 {
    round2(delivery_fee + cod_fee - promo_discount - discount)
}

/// Allocate a globally unique consignment identifier.
pub fn generate_consignment_id() -> String {
    format!("CON{}", Uuid::new_v4().simple())
}

pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    stores: Arc<dyn StoreRepository>,
    cities: Arc<dyn CityRepository>,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        stores: Arc<dyn StoreRepository>,
        cities: Arc<dyn CityRepository>,
    ) -> Self {
        Self {
            orders,
            stores,
            cities,
        }
    }

    /// City lookup failures are absorbed into the fallback base fee.
    async fn base_fee_for_city(&self, city_id: i64) -> f64 {
        match self.cities.find_by_id(city_id).await {
            Ok(Some(city)) => city.base_delivery_fee,
            Ok(None) => FALLBACK_BASE_DELIVERY_FEE,
            Err(err) => {
                tracing::warn!(city_id, "city lookup failed, using fallback base fee: {}", err);
                FALLBACK_BASE_DELIVERY_FEE
            }
        }
    }

    pub async fn create_order(
        &self,
        request: OrderCreateRequest,
        caller_id: i64,
    ) -> Result<OrderCreateResponse> {
        request.validate()?;

        if self.stores.find_by_id(request.store_id).await?.is_none() {
            return Err(AppError::InvalidReference(
                "invalid store_id: store not found".to_string(),
            ));
        }

        let consignment_id = generate_consignment_id();

        let base_fee = self.base_fee_for_city(request.recipient_city).await;
        let delivery_fee = delivery_fee(base_fee, request.item_weight);
        let cod_fee = cod_fee(request.order_amount);
        let total_fee = total_fee(
            delivery_fee,
            cod_fee,
            request.promo_discount,
            request.discount,
        );

        let new_order = NewOrder {
            consignment_id,
            user_id: caller_id,
            store_id: request.store_id,
            merchant_order_id: request.merchant_order_id,
            recipient_name: request.recipient_name,
            recipient_phone: request.recipient_phone,
            recipient_address: request.recipient_address,
            recipient_city: request.recipient_city,
            recipient_zone: request.recipient_zone,
            recipient_area: request.recipient_area,
            order_type: OrderType::Delivery,
            delivery_type_id: request.delivery_type,
            item_type: request.item_type,
            item_quantity: request.item_quantity,
            item_weight: request.item_weight,
            item_description: request.item_description,
            special_instruction: request.special_instruction,
            order_amount: request.order_amount,
            amount_to_collect: round2(request.order_amount + total_fee),
            delivery_fee,
            cod_fee,
            promo_discount: request.promo_discount,
            discount: request.discount,
            total_fee,
            order_status: OrderStatus::Pending,
        };

        let order = self.orders.create(new_order).await?;

        Ok(OrderCreateResponse {
            consignment_id: order.consignment_id,
            merchant_order_id: order.merchant_order_id,
            order_status: order.order_status,
            delivery_fee: order.delivery_fee,
        })
    }

    /// Fetch an order the caller owns, or fail with not-found/unauthorized.
    async fn owned_order(&self, consignment_id: &str, caller_id: i64) -> Result<Order> {
        let order = self
            .orders
            .find_by_consignment_id(consignment_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "order with consignment ID '{}' not found",
                    consignment_id
                ))
            })?;

        if order.user_id != caller_id {
            return Err(AppError::Unauthorized("Unauthorized".to_string()));
        }

        Ok(order)
    }

    pub async fn get_order(&self, consignment_id: &str, caller_id: i64) -> Result<OrderResponse> {
        let order = self.owned_order(consignment_id, caller_id).await?;
        Ok(OrderResponse::from(&order))
    }

    pub async fn list_orders(
        &self,
        caller_id: i64,
        order_status: Option<OrderStatus>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<OrderListResponse> {
        let page = page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let per_page = limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_PAGE_LENGTH)
            .min(MAX_PAGE_LENGTH);

        let filter = OrderListFilter {
            user_id: caller_id,
            order_status,
            page,
            per_page,
        };

        let (orders, total) = self.orders.list(&filter).await?;

        Ok(OrderListResponse {
            data: orders.iter().map(OrderResponse::from).collect(),
            pagination: Pagination::new(total, page, per_page),
        })
    }

    pub async fn update_order(
        &self,
        consignment_id: &str,
        request: OrderUpdateRequest,
        caller_id: i64,
    ) -> Result<()> {
        request.validate()?;

        let mut order = self.owned_order(consignment_id, caller_id).await?;

        if let Some(merchant_order_id) = request.merchant_order_id {
            order.merchant_order_id = Some(merchant_order_id);
        }
        if let Some(recipient_name) = request.recipient_name {
            order.recipient_name = recipient_name;
        }
        if let Some(recipient_phone) = request.recipient_phone {
            order.recipient_phone = recipient_phone;
        }
        if let Some(recipient_address) = request.recipient_address {
            order.recipient_address = recipient_address;
        }
        if let Some(item_weight) = request.item_weight {
            order.item_weight = item_weight;
        }
        if let Some(special_instruction) = request.special_instruction {
            order.special_instruction = Some(special_instruction);
        }
        if let Some(order_amount) = request.order_amount {
            order.order_amount = order_amount;

            let base_fee = self.base_fee_for_city(order.recipient_city).await;
            order.delivery_fee = delivery_fee(base_fee, order.item_weight);
            order.cod_fee = cod_fee(order.order_amount);
            order.total_fee = total_fee(
                order.delivery_fee,
                order.cod_fee,
                order.promo_discount,
                order.discount,
            );
            order.amount_to_collect = round2(order.order_amount + order.total_fee);
        }

        let affected = self.orders.update(&order).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!(
                "order with consignment ID '{}' not found",
                consignment_id
            )));
        }

        Ok(())
    }

    pub async fn update_order_status(
        &self,
        consignment_id: &str,
        caller_id: i64,
        status: OrderStatus,
    ) -> Result<()> {
        let order = self.owned_order(consignment_id, caller_id).await?;

        let affected = self.orders.update_status(order.id, status).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!(
                "order with consignment ID '{}' not found",
                consignment_id
            )));
        }

        Ok(())
    }

    pub async fn cancel_order(&self, consignment_id: &str, caller_id: i64) -> Result<()> {
        self.update_order_status(consignment_id, caller_id, OrderStatus::Cancelled)
            .await
    }

    pub async fn delete_order(&self, consignment_id: &str, caller_id: i64) -> Result<()> {
        let order = self.owned_order(consignment_id, caller_id).await?;

        let affected = self.orders.delete(order.id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!(
                "order with consignment ID '{}' not found",
                consignment_id
            )));
        }

        Ok(())
    }
}
