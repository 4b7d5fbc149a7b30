/// Delivery type reference data (regular, express, same-day, ...).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;
use crate::models::item_type::validate_type_name;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DeliveryType {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryTypeCreateRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryTypeUpdateRequest {
    pub name: String,
}

impl DeliveryTypeCreateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_type_name(&self.name, 50)
    }
}

impl DeliveryTypeUpdateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_type_name(&self.name, 50)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeliveryTypeResponse {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&DeliveryType> for DeliveryTypeResponse {
    fn from(delivery_type: &DeliveryType) -> Self {
        Self {
            id: delivery_type.id,
            name: delivery_type.name.clone(),
            created_at: delivery_type.created_at,
            updated_at: delivery_type.updated_at,
        }
    }
}
