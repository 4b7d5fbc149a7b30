/// Merchant store management.
use std::sync::Arc;

use crate::db::StoreRepository;
use crate::error::{AppError, Result};
use crate::models::store::{StoreCreateRequest, StoreResponse, StoreUpdateRequest};

pub struct StoreService {
    stores: Arc<dyn StoreRepository>,
}

impl StoreService {
    pub fn new(stores: Arc<dyn StoreRepository>) -> Self {
        Self { stores }
    }

    pub async fn create_store(&self, request: StoreCreateRequest) -> Result<StoreResponse> {
        request.validate()?;

        if self.stores.find_by_name(&request.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "store with name '{}' already exists",
                request.name
            )));
        }

        let store = self
            .stores
            .create(&request.name, &request.contact_phone, &request.address)
            .await?;

        Ok(StoreResponse::from(&store))
    }

    pub async fn get_store(&self, id: i64) -> Result<StoreResponse> {
        let store = self
            .stores
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("store with ID {} not found", id)))?;

        Ok(StoreResponse::from(&store))
    }

    pub async fn list_stores(&self, limit: i64, offset: i64) -> Result<Vec<StoreResponse>> {
        let stores = self.stores.list(limit, offset).await?;
        Ok(stores.iter().map(StoreResponse::from).collect())
    }

    pub async fn update_store(&self, id: i64, request: StoreUpdateRequest) -> Result<()> {
        request.validate()?;

        let mut store = self
            .stores
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("store with ID {} not found", id)))?;

        if request.name != store.name {
            if let Some(existing) = self.stores.find_by_name(&request.name).await? {
                if existing.id != store.id {
                    return Err(AppError::Conflict(format!(
                        "store with name '{}' already exists",
                        request.name
                    )));
                }
            }
            store.name = request.name;
        }
        if let Some(contact_phone) = request.contact_phone {
            store.contact_phone = contact_phone;
        }
        if let Some(address) = request.address {
            store.address = address;
        }

        let affected = self.stores.update(&store).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("store with ID {} not found", id)));
        }

        Ok(())
    }

    pub async fn delete_store(&self, id: i64) -> Result<()> {
        if self.stores.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("store with ID {} not found", id)));
        }

        let affected = self.stores.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("store with ID {} not found", id)));
        }

        Ok(())
    }
}
