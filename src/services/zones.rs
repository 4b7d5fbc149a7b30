/// Zone management; zones belong to a city and are unique by name within it.
use std::sync::Arc;

use crate::db::{CityRepository, ZoneRepository};
use crate::error::{AppError, Result};
use crate::models::zone::{ZoneCreateRequest, ZoneResponse, ZoneUpdateRequest};

pub struct ZoneService {
    zones: Arc<dyn ZoneRepository>,
    cities: Arc<dyn CityRepository>,
}

impl ZoneService {
    pub fn new(zones: Arc<dyn ZoneRepository>, cities: Arc<dyn CityRepository>) -> Self {
        Self { zones, cities }
    }

    pub async fn create_zone(&self, request: ZoneCreateRequest) -> Result<ZoneResponse> {
        request.validate()?;

        if self.cities.find_by_id(request.city_id).await?.is_none() {
            return Err(AppError::InvalidReference(format!(
                "city with ID {} does not exist",
                request.city_id
            )));
        }

        if self
            .zones
            .find_by_name_in_city(request.city_id, &request.name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "zone with name '{}' already exists in this city",
                request.name
            )));
        }

        let zone = self.zones.create(request.city_id, &request.name).await?;
        Ok(ZoneResponse::from(&zone))
    }

    pub async fn get_zone(&self, id: i64) -> Result<ZoneResponse> {
        let zone = self
            .zones
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("zone with ID {} not found", id)))?;

        Ok(ZoneResponse::from(&zone))
    }

    pub async fn list_zones(
        &self,
        city_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ZoneResponse>> {
        let zones = match city_id {
            Some(city_id) => {
                if self.cities.find_by_id(city_id).await?.is_none() {
                    return Err(AppError::InvalidReference(format!(
                        "city with ID {} does not exist",
                        city_id
                    )));
                }
                self.zones.list_by_city(city_id, limit, offset).await?
            }
            None => self.zones.list(limit, offset).await?,
        };

        Ok(zones.iter().map(ZoneResponse::from).collect())
    }

    pub async fn update_zone(&self, id: i64, request: ZoneUpdateRequest) -> Result<()> {
        request.validate()?;

        let mut zone = self
            .zones
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("zone with ID {} not found", id)))?;

        if request.name != zone.name {
            if let Some(existing) = self
                .zones
                .find_by_name_in_city(zone.city_id, &request.name)
                .await?
            {
                if existing.id != zone.id {
                    return Err(AppError::Conflict(format!(
                        "zone with name '{}' already exists in this city",
                        request.name
                    )));
                }
            }
            zone.name = request.name;
        }

        let affected = self.zones.update(&zone).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("zone with ID {} not found", id)));
        }

        Ok(())
    }

    pub async fn delete_zone(&self, id: i64) -> Result<()> {
        if self.zones.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("zone with ID {} not found", id)));
        }

        let affected = self.zones.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("zone with ID {} not found", id)));
        }

        Ok(())
    }
}
