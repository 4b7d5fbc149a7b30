/// City reference-data management.
use std::sync::Arc;

use crate::db::CityRepository;
use crate::error::{AppError, Result};
use crate::models::city::{CityCreateRequest, CityResponse, CityUpdateRequest};

pub struct CityService {
    cities: Arc<dyn CityRepository>,
}

impl CityService {
    pub fn new(cities: Arc<dyn CityRepository>) -> Self {
        Self { cities }
    }

    pub async fn create_city(&self, request: CityCreateRequest) -> Result<CityResponse> {
        request.validate()?;

        if self.cities.find_by_name(&request.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "city with name '{}' already exists",
                request.name
            )));
        }

        let city = self
            .cities
            .create(&request.name, request.base_delivery_fee)
            .await?;

        Ok(CityResponse::from(&city))
    }

    pub async fn get_city(&self, id: i64) -> Result<CityResponse> {
        let city = self
            .cities
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("city with ID {} not found", id)))?;

        Ok(CityResponse::from(&city))
    }

    pub async fn list_cities(&self, limit: i64, offset: i64) -> Result<Vec<CityResponse>> {
        let cities = self.cities.list(limit, offset).await?;
        Ok(cities.iter().map(CityResponse::from).collect())
    }

    pub async fn update_city(&self, id: i64, request: CityUpdateRequest) -> Result<()> {
        request.validate()?;

        let mut city = self
            .cities
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("city with ID {} not found", id)))?;

        if request.name != city.name {
            if let Some(existing) = self.cities.find_by_name(&request.name).await? {
                if existing.id != city.id {
                    return Err(AppError::Conflict(format!(
                        "city with name '{}' already exists",
                        request.name
                    )));
                }
            }
            city.name = request.name;
        }
        city.base_delivery_fee = request.base_delivery_fee;

        let affected = self.cities.update(&city).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("city with ID {} not found", id)));
        }

        Ok(())
    }

    pub async fn delete_city(&self, id: i64) -> Result<()> {
        if self.cities.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("city with ID {} not found", id)));
        }

        let affected = self.cities.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("city with ID {} not found", id)));
        }

        Ok(())
    }
}
