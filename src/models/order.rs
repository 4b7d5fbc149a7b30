/// Order entity and its request/response types.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;
use crate::validators::{
    self, greater_than_message, max_length_message, min_value_message, required_message,
    FieldErrors, PHONE_FORMAT_MESSAGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Delivery,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub consignment_id: String,
    pub user_id: i64,
    pub store_id: i64,
    pub merchant_order_id: Option<String>,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub recipient_address: String,
    pub recipient_city: i64,
    pub recipient_zone: i64,
    pub recipient_area: Option<String>,
    pub order_type: OrderType,
    pub delivery_type_id: i64,
    pub item_type: i64,
    pub item_quantity: i32,
    pub item_weight: f64,
    pub item_description: Option<String>,
    pub special_instruction: Option<String>,
    pub order_amount: f64,
    pub amount_to_collect: f64,
    pub delivery_fee: f64,
    pub cod_fee: f64,
    pub promo_discount: f64,
    pub discount: f64,
    pub total_fee: f64,
    pub order_status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Insert payload for a new order; ids and timestamps are database-assigned.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub consignment_id: String,
    pub user_id: i64,
    pub store_id: i64,
    pub merchant_order_id: Option<String>,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub recipient_address: String,
    pub recipient_city: i64,
    pub recipient_zone: i64,
    pub recipient_area: Option<String>,
    pub order_type: OrderType,
    pub delivery_type_id: i64,
    pub item_type: i64,
    pub item_quantity: i32,
    pub item_weight: f64,
    pub item_description: Option<String>,
    pub special_instruction: Option<String>,
    pub order_amount: f64,
    pub amount_to_collect: f64,
    pub delivery_fee: f64,
    pub cod_fee: f64,
    pub promo_discount: f64,
    pub discount: f64,
    pub total_fee: f64,
    pub order_status: OrderStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreateRequest {
    pub store_id: i64,
    pub merchant_order_id: Option<String>,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub recipient_address: String,
    pub recipient_city: i64,
    pub recipient_zone: i64,
    pub recipient_area: Option<String>,
    pub delivery_type: i64,
    pub item_type: i64,
    pub item_quantity: i32,
    pub item_weight: f64,
    pub order_amount: f64,
    pub item_description: Option<String>,
    pub special_instruction: Option<String>,
    #[serde(default)]
    pub promo_discount: f64,
    #[serde(default)]
    pub discount: f64,
}

impl OrderCreateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();

        if self.store_id < 1 {
            errors.add("store_id", required_message("store"));
        }
        if let Some(merchant_order_id) = &self.merchant_order_id {
            if merchant_order_id.len() > 100 {
                errors.add(
                    "merchant_order_id",
                    max_length_message("merchant order ID", 100),
                );
            }
        }
        if self.recipient_name.trim().is_empty() {
            errors.add("recipient_name", required_message("recipient name"));
        } else if self.recipient_name.len() > 255 {
            errors.add("recipient_name", max_length_message("recipient name", 255));
        }
        if self.recipient_phone.trim().is_empty() {
            errors.add("recipient_phone", required_message("recipient phone"));
        } else if !validators::validate_bd_phone(&self.recipient_phone) {
            errors.add("recipient_phone", PHONE_FORMAT_MESSAGE);
        }
        if self.recipient_address.trim().is_empty() {
            errors.add("recipient_address", required_message("recipient address"));
        }
        if self.recipient_city < 1 {
            errors.add("recipient_city", required_message("recipient city"));
        }
        if self.recipient_zone < 1 {
            errors.add("recipient_zone", required_message("recipient zone"));
        }
        if self.delivery_type < 1 {
            errors.add("delivery_type", required_message("delivery type"));
        }
        if self.item_type < 1 {
            errors.add("item_type", required_message("item type"));
        }
        if self.item_quantity < 1 {
            errors.add("item_quantity", required_message("item quantity"));
        }
        if self.item_weight <= 0.0 {
            errors.add("item_weight", greater_than_message("item weight", "0"));
        }
        if self.order_amount <= 0.0 {
            errors.add("order_amount", greater_than_message("order amount", "0"));
        }
        if self.promo_discount < 0.0 {
            errors.add(
                "promo_discount",
                min_value_message("promo discount", "0"),
            );
        }
        if self.discount < 0.0 {
            errors.add("discount", min_value_message("discount", "0"));
        }

        errors.into_result()
    }
}

/// Partial update: absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderUpdateRequest {
    pub merchant_order_id: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_phone: Option<String>,
    pub recipient_address: Option<String>,
    pub item_weight: Option<f64>,
    pub order_amount: Option<f64>,
    pub special_instruction: Option<String>,
}

impl OrderUpdateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();

        if let Some(merchant_order_id) = &self.merchant_order_id {
            if merchant_order_id.len() > 100 {
                errors.add(
                    "merchant_order_id",
                    max_length_message("merchant order ID", 100),
                );
            }
        }
        if let Some(name) = &self.recipient_name {
            if name.trim().is_empty() {
                errors.add("recipient_name", required_message("recipient name"));
            } else if name.len() > 255 {
                errors.add("recipient_name", max_length_message("recipient name", 255));
            }
        }
        if let Some(phone) = &self.recipient_phone {
            if !validators::validate_bd_phone(phone) {
                errors.add("recipient_phone", PHONE_FORMAT_MESSAGE);
            }
        }
        if let Some(address) = &self.recipient_address {
            if address.trim().is_empty() {
                errors.add("recipient_address", required_message("recipient address"));
            }
        }
        if let Some(weight) = self.item_weight {
            if weight <= 0.0 {
                errors.add("item_weight", greater_than_message("item weight", "0"));
            }
        }
        if let Some(amount) = self.order_amount {
            if amount <= 0.0 {
                errors.add("order_amount", greater_than_message("order amount", "0"));
            }
        }

        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderCreateResponse {
    pub consignment_id: String,
    pub merchant_order_id: Option<String>,
    pub order_status: OrderStatus,
    pub delivery_fee: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub consignment_id: String,
    pub order_created_at: DateTime<Utc>,
    pub order_description: Option<String>,
    pub merchant_order_id: Option<String>,
    pub recipient_name: String,
    pub recipient_address: String,
    pub recipient_phone: String,
    pub order_amount: f64,
    pub total_fee: f64,
    pub instruction: Option<String>,
    pub order_type: OrderType,
    pub cod_fee: f64,
    pub promo_discount: f64,
    pub discount: f64,
    pub delivery_fee: f64,
    pub order_status: OrderStatus,
    pub item_type: i64,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            consignment_id: order.consignment_id.clone(),
            order_created_at: order.created_at,
            order_description: order.item_description.clone(),
            merchant_order_id: order.merchant_order_id.clone(),
            recipient_name: order.recipient_name.clone(),
            recipient_address: order.recipient_address.clone(),
            recipient_phone: order.recipient_phone.clone(),
            order_amount: order.order_amount,
            total_fee: order.total_fee,
            instruction: order.special_instruction.clone(),
            order_type: order.order_type,
            cod_fee: order.cod_fee,
            promo_discount: order.promo_discount,
            discount: order.discount,
            delivery_fee: order.delivery_fee,
            order_status: order.order_status,
            item_type: order.item_type,
        }
    }
}

/// `page`/`limit`/`order_status` query parameters for the order listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderListQuery {
    pub order_status: Option<OrderStatus>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Owner-scoped listing filter with normalized paging.
#[derive(Debug, Clone)]
pub struct OrderListFilter {
    pub user_id: i64,
    pub order_status: Option<OrderStatus>,
    pub page: i64,
    pub per_page: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderListResponse {
    pub data: Vec<OrderResponse>,
    #[serde(flatten)]
    pub pagination: crate::models::Pagination,
}
