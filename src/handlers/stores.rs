/// Store endpoints.
use actix_web::{http::StatusCode, web, HttpResponse};

use crate::app_state::AppState;
use crate::error::AppError;
use crate::models::pagination::ListQuery;
use crate::models::store::{StoreCreateRequest, StoreUpdateRequest};
use crate::response;

pub async fn create_store(
    state: web::Data<AppState>,
    payload: web::Json<StoreCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state.stores.create_store(payload.into_inner()).await?;
    Ok(response::success(
        StatusCode::CREATED,
        "Store created successfully",
        result,
    ))
}

pub async fn get_store(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let result = state.stores.get_store(*id).await?;
    Ok(response::success(
        StatusCode::OK,
        "Store fetched successfully",
        result,
    ))
}

pub async fn list_stores(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let (limit, offset) = query.normalize();
    let result = state.stores.list_stores(limit, offset).await?;
    Ok(response::success(
        StatusCode::OK,
        "Stores fetched successfully",
        result,
    ))
}

pub async fn update_store(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    payload: web::Json<StoreUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    state.stores.update_store(*id, payload.into_inner()).await?;
    Ok(response::message_only(
        StatusCode::OK,
        "Store updated successfully",
    ))
}

pub async fn delete_store(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.stores.delete_store(*id).await?;
    Ok(response::message_only(
        StatusCode::OK,
        "Store deleted successfully",
    ))
}
