/// Item type management.
use std::sync::Arc;

use crate::db::ItemTypeRepository;
use crate::error::{is_unique_violation, AppError, Result};
use crate::models::item_type::{ItemTypeCreateRequest, ItemTypeResponse, ItemTypeUpdateRequest};

pub struct ItemTypeService {
    item_types: Arc<dyn ItemTypeRepository>,
}

impl ItemTypeService {
    pub fn new(item_types: Arc<dyn ItemTypeRepository>) -> Self {
        Self { item_types }
    }

    pub async fn create_item_type(
        &self,
        request: ItemTypeCreateRequest,
    ) -> Result<ItemTypeResponse> {
        request.validate()?;

        if self.item_types.find_by_name(&request.name).await?.is_some() {
            return Err(duplicate_name(&request.name));
        }

        match self.item_types.create(&request.name).await {
            Ok(item_type) => Ok(ItemTypeResponse::from(&item_type)),
            Err(AppError::Database(ref db)) if is_unique_violation(db) => {
                Err(duplicate_name(&request.name))
            }
            Err(err) => Err(err),
        }
    }

    pub async fn get_item_type(&self, id: i64) -> Result<ItemTypeResponse> {
        let item_type = self
            .item_types
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("item type with ID {} not found", id)))?;

        Ok(ItemTypeResponse::from(&item_type))
    }

    pub async fn list_item_types(&self, limit: i64, offset: i64) -> Result<Vec<ItemTypeResponse>> {
        let item_types = self.item_types.list(limit, offset).await?;
        Ok(item_types.iter().map(ItemTypeResponse::from).collect())
    }

    pub async fn update_item_type(&self, id: i64, request: ItemTypeUpdateRequest) -> Result<()> {
        request.validate()?;

        let item_type = self
            .item_types
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("item type with ID {} not found", id)))?;

        if request.name != item_type.name {
            if let Some(existing) = self.item_types.find_by_name(&request.name).await? {
                if existing.id != item_type.id {
                    return Err(duplicate_name(&request.name));
                }
            }
        }

        let affected = self.item_types.update(id, &request.name).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!(
                "item type with ID {} not found",
                id
            )));
        }

        Ok(())
    }

    pub async fn delete_item_type(&self, id: i64) -> Result<()> {
        if self.item_types.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "item type with ID {} not found",
                id
            )));
        }

        let affected = self.item_types.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!(
                "item type with ID {} not found",
                id
            )));
        }

        Ok(())
    }
}

fn duplicate_name(name: &str) -> AppError {
    AppError::Conflict(format!("item type with name '{}' already exists", name))
}
