/// Item type reference data (parcel, document, fragile, ...).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;
use crate::validators::{max_length_message, required_message, FieldErrors};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ItemType {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemTypeCreateRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemTypeUpdateRequest {
    pub name: String,
}

pub(crate) fn validate_type_name(name: &str, max: usize) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    if name.trim().is_empty() {
        errors.add("name", required_message("name"));
    } else if name.len() > max {
        errors.add("name", max_length_message("name", max));
    }
    errors.into_result()
}

impl ItemTypeCreateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_type_name(&self.name, 50)
    }
}

impl ItemTypeUpdateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_type_name(&self.name, 50)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemTypeResponse {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ItemType> for ItemTypeResponse {
    fn from(item_type: &ItemType) -> Self {
        Self {
            id: item_type.id,
            name: item_type.name.clone(),
            created_at: item_type.created_at,
            updated_at: item_type.updated_at,
        }
    }
}
