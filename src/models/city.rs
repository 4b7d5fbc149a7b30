/// City reference data; supplies the base delivery fee for fee computation.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;
use crate::validators::{max_length_message, min_value_message, required_message, FieldErrors};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub base_delivery_fee: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityCreateRequest {
    pub name: String,
    #[serde(default = "default_base_delivery_fee")]
    pub base_delivery_fee: f64,
}

fn default_base_delivery_fee() -> f64 {
    100.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityUpdateRequest {
    pub name: String,
    pub base_delivery_fee: f64,
}

fn validate_city_fields(name: &str, base_delivery_fee: f64) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    if name.trim().is_empty() {
        errors.add("name", required_message("name"));
    } else if name.len() > 100 {
        errors.add("name", max_length_message("name", 100));
    }
    if base_delivery_fee < 0.0 {
        errors.add(
            "base_delivery_fee",
            min_value_message("base delivery fee", "0"),
        );
    }
    errors.into_result()
}

impl CityCreateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_city_fields(&self.name, self.base_delivery_fee)
    }
}

impl CityUpdateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_city_fields(&self.name, self.base_delivery_fee)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CityResponse {
    pub id: i64,
    pub name: String,
    pub base_delivery_fee: f64,
    pub updated_at: DateTime<Utc>,
}

impl From<&City> for CityResponse {
    fn from(city: &City) -> Self {
        Self {
            id: city.id,
            name: city.name.clone(),
            base_delivery_fee: city.base_delivery_fee,
            updated_at: city.updated_at,
        }
    }
}
