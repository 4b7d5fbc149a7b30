/// Zone endpoints.
use actix_web::{http::StatusCode, web, HttpResponse};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::error::AppError;
use crate::models::zone::{ZoneCreateRequest, ZoneUpdateRequest};
use crate::response;

#[derive(Debug, Deserialize)]
pub struct ZoneListQuery {
    pub city_id: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub async fn create_zone(
    state: web::Data<AppState>,
    payload: web::Json<ZoneCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state.zones.create_zone(payload.into_inner()).await?;
    Ok(response::success(
        StatusCode::CREATED,
        "Zone created successfully",
        result,
    ))
}

pub async fn get_zone(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let result = state.zones.get_zone(*id).await?;
    Ok(response::success(
        StatusCode::OK,
        "Zone fetched successfully",
        result,
    ))
}

pub async fn list_zones(
    state: web::Data<AppState>,
    query: web::Query<ZoneListQuery>,
) -> Result<HttpResponse, AppError> {
    let limit = query.limit.filter(|l| *l > 0).unwrap_or(10);
    let offset = query.offset.filter(|o| *o >= 0).unwrap_or(0);
    let result = state.zones.list_zones(query.city_id, limit, offset).await?;
    Ok(response::success(
        StatusCode::OK,
        "Zones fetched successfully",
        result,
    ))
}

pub async fn update_zone(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    payload: web::Json<ZoneUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    state.zones.update_zone(*id, payload.into_inner()).await?;
    Ok(response::message_only(
        StatusCode::OK,
        "Zone updated successfully",
    ))
}

pub async fn delete_zone(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.zones.delete_zone(*id).await?;
    Ok(response::message_only(
        StatusCode::OK,
        "Zone deleted successfully",
    ))
}
