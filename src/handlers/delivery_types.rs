/// Delivery type endpoints.
use actix_web::{http::StatusCode, web, HttpResponse};

use crate::app_state::AppState;
use crate::error::AppError;
use crate::models::delivery_type::{DeliveryTypeCreateRequest, DeliveryTypeUpdateRequest};
use crate::models::pagination::ListQuery;
use crate::response;

pub async fn create_delivery_type(
    state: web::Data<AppState>,
    payload: web::Json<DeliveryTypeCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state
        .delivery_types
        .create_delivery_type(payload.into_inner())
        .await?;
    Ok(response::success(
        StatusCode::CREATED,
        "Delivery type created successfully",
        result,
    ))
}

pub async fn get_delivery_type(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let result = state.delivery_types.get_delivery_type(*id).await?;
    Ok(response::success(
        StatusCode::OK,
        "Delivery type fetched successfully",
        result,
    ))
}

pub async fn list_delivery_types(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let (limit, offset) = query.normalize();
    let result = state
        .delivery_types
        .list_delivery_types(limit, offset)
        .await?;
    Ok(response::success(
        StatusCode::OK,
        "Delivery types fetched successfully",
        result,
    ))
}

pub async fn update_delivery_type(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    payload: web::Json<DeliveryTypeUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .delivery_types
        .update_delivery_type(*id, payload.into_inner())
        .await?;
    Ok(response::message_only(
        StatusCode::OK,
        "Delivery type updated successfully",
    ))
}

pub async fn delete_delivery_type(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.delivery_types.delete_delivery_type(*id).await?;
    Ok(response::message_only(
        StatusCode::OK,
        "Delivery type deleted successfully",
    ))
}
