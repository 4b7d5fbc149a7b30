/// Merchant store reference data.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;
use crate::validators::{
    self, max_length_message, required_message, FieldErrors, PHONE_FORMAT_MESSAGE,
};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub contact_phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreCreateRequest {
    pub name: String,
    pub contact_phone: String,
    #[serde(default)]
    pub address: String,
}

impl StoreCreateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", required_message("name"));
        } else if self.name.len() > 255 {
            errors.add("name", max_length_message("name", 255));
        }
        if self.contact_phone.trim().is_empty() {
            errors.add("contact_phone", required_message("contact phone"));
        } else if !validators::validate_bd_phone(&self.contact_phone) {
            errors.add("contact_phone", PHONE_FORMAT_MESSAGE);
        }
        errors.into_result()
    }
}

/// Partial update: `contact_phone` and `address` keep their values when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreUpdateRequest {
    pub name: String,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

impl StoreUpdateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", required_message("name"));
        } else if self.name.len() > 255 {
            errors.add("name", max_length_message("name", 255));
        }
        if let Some(phone) = &self.contact_phone {
            if !validators::validate_bd_phone(phone) {
                errors.add("contact_phone", PHONE_FORMAT_MESSAGE);
            }
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    pub id: i64,
    pub name: String,
    pub contact_phone: String,
    pub address: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&Store> for StoreResponse {
    fn from(store: &Store) -> Self {
        Self {
            id: store.id,
            name: store.name.clone(),
            contact_phone: store.contact_phone.clone(),
            address: store.address.clone(),
            updated_at: store.updated_at,
        }
    }
}
