/// Delivery type management.
use std::sync::Arc;

use crate::db::DeliveryTypeRepository;
use crate::error::{is_unique_violation, AppError, Result};
use crate::models::delivery_type::{
    DeliveryTypeCreateRequest, DeliveryTypeResponse, DeliveryTypeUpdateRequest,
};

pub struct DeliveryTypeService {
    delivery_types: Arc<dyn DeliveryTypeRepository>,
}

impl DeliveryTypeService {
    pub fn new(delivery_types: Arc<dyn DeliveryTypeRepository>) -> Self {
        Self { delivery_types }
    }

    pub async fn create_delivery_type(
        &self,
        request: DeliveryTypeCreateRequest,
    ) -> Result<DeliveryTypeResponse> {
        request.validate()?;

        if self
            .delivery_types
            .find_by_name(&request.name)
            .await?
            .is_some()
        {
            return Err(duplicate_name(&request.name));
        }

        match self.delivery_types.create(&request.name).await {
            Ok(delivery_type) => Ok(DeliveryTypeResponse::from(&delivery_type)),
            Err(AppError::Database(ref db)) if is_unique_violation(db) => {
                Err(duplicate_name(&request.name))
            }
            Err(err) => Err(err),
        }
    }

    pub async fn get_delivery_type(&self, id: i64) -> Result<DeliveryTypeResponse> {
        let delivery_type = self
            .delivery_types
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("delivery type with ID {} not found", id))
            })?;

        Ok(DeliveryTypeResponse::from(&delivery_type))
    }

    pub async fn list_delivery_types(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DeliveryTypeResponse>> {
        let delivery_types = self.delivery_types.list(limit, offset).await?;
        Ok(delivery_types
            .iter()
            .map(DeliveryTypeResponse::from)
            .collect())
    }

    pub async fn update_delivery_type(
        &self,
        id: i64,
        request: DeliveryTypeUpdateRequest,
    ) -> Result<()> {
        request.validate()?;

        let delivery_type = self
            .delivery_types
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("delivery type with ID {} not found", id))
            })?;

        if request.name != delivery_type.name {
            if let Some(existing) = self.delivery_types.find_by_name(&request.name).await? {
                if existing.id != delivery_type.id {
                    return Err(duplicate_name(&request.name));
                }
            }
        }

        let affected = self.delivery_types.update(id, &request.name).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!(
                "delivery type with ID {} not found",
                id
            )));
        }

        Ok(())
    }

    pub async fn delete_delivery_type(&self, id: i64) -> Result<()> {
        if self.delivery_types.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "delivery type with ID {} not found",
                id
            )));
        }

        let affected = self.delivery_types.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!(
                "delivery type with ID {} not found",
                id
            )));
        }

        Ok(())
    }
}

fn duplicate_name(name: &str) -> AppError {
    AppError::Conflict(format!("delivery type with name '{}' already exists", name))
}
