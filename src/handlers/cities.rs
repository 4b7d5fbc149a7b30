/// City endpoints.
use actix_web::{http::StatusCode, web, HttpResponse};

use crate::app_state::AppState;
use crate::error::AppError;
use crate::models::city::{CityCreateRequest, CityUpdateRequest};
use crate::models::pagination::ListQuery;
use crate::response;

pub async fn create_city(
    state: web::Data<AppState>,
    payload: web::Json<CityCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state.cities.create_city(payload.into_inner()).await?;
    Ok(response::success(
        StatusCode::CREATED,
        "City created successfully",
        result,
    ))
}

pub async fn get_city(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let result = state.cities.get_city(*id).await?;
    Ok(response::success(
        StatusCode::OK,
        "City fetched successfully",
        result,
    ))
}

pub async fn list_cities(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let (limit, offset) = query.normalize();
    let result = state.cities.list_cities(limit, offset).await?;
    Ok(response::success(
        StatusCode::OK,
        "Cities fetched successfully",
        result,
    ))
}

pub async fn update_city(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    payload: web::Json<CityUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    state.cities.update_city(*id, payload.into_inner()).await?;
    Ok(response::message_only(
        StatusCode::OK,
        "City updated successfully",
    ))
}

pub async fn delete_city(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.cities.delete_city(*id).await?;
    Ok(response::message_only(
        StatusCode::OK,
        "City deleted successfully",
    ))
}
