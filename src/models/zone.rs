/// Delivery zones, scoped to a city.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;
use crate::validators::{max_length_message, required_message, FieldErrors};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Zone {
    pub id: i64,
    pub city_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneCreateRequest {
    pub city_id: i64,
    pub name: String,
}

impl ZoneCreateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        if self.city_id < 1 {
            errors.add("city_id", required_message("city"));
        }
        validate_zone_name(&self.name, &mut errors);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneUpdateRequest {
    pub name: String,
}

impl ZoneUpdateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        validate_zone_name(&self.name, &mut errors);
        errors.into_result()
    }
}

fn validate_zone_name(name: &str, errors: &mut FieldErrors) {
    if name.trim().is_empty() {
        errors.add("name", required_message("name"));
    } else if name.len() > 100 {
        errors.add("name", max_length_message("name", 100));
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneResponse {
    pub id: i64,
    pub city_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Zone> for ZoneResponse {
    fn from(zone: &Zone) -> Self {
        Self {
            id: zone.id,
            city_id: zone.city_id,
            name: zone.name.clone(),
            created_at: zone.created_at,
            updated_at: zone.updated_at,
        }
    }
}
