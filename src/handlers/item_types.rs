/// Item type endpoints.
use actix_web::{http::StatusCode, web, HttpResponse};

use crate::app_state::AppState;
use crate::error::AppError;
use crate::models::item_type::{ItemTypeCreateRequest, ItemTypeUpdateRequest};
use crate::models::pagination::ListQuery;
use crate::response;

pub async fn create_item_type(
    state: web::Data<AppState>,
    payload: web::Json<ItemTypeCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state.item_types.create_item_type(payload.into_inner()).await?;
    Ok(response::success(
        StatusCode::CREATED,
        "Item type created successfully",
        result,
    ))
}

pub async fn get_item_type(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let result = state.item_types.get_item_type(*id).await?;
    Ok(response::success(
        StatusCode::OK,
        "Item type fetched successfully",
        result,
    ))
}

pub async fn list_item_types(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let (limit, offset) = query.normalize();
    let result = state.item_types.list_item_types(limit, offset).await?;
    Ok(response::success(
        StatusCode::OK,
        "Item types fetched successfully",
        result,
    ))
}

pub async fn update_item_type(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    payload: web::Json<ItemTypeUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .item_types
        .update_item_type(*id, payload.into_inner())
        .await?;
    Ok(response::message_only(
        StatusCode::OK,
        "Item type updated successfully",
    ))
}

pub async fn delete_item_type(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.item_types.delete_item_type(*id).await?;
    Ok(response::message_only(
        StatusCode::OK,
        "Item type deleted successfully",
    ))
}
