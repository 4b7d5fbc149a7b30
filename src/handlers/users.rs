/// User endpoints. Registration is open; everything else sits behind the
/// session gate.
use actix_web::{http::StatusCode, web, HttpResponse};

use crate::app_state::AppState;
use crate::error::AppError;
use crate::models::pagination::ListQuery;
use crate::models::user::{UserCreateRequest, UserUpdateRequest};
use crate::response;

pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<UserCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state.users.create_user(payload.into_inner()).await?;
    Ok(response::success(
        StatusCode::CREATED,
        "User registered successfully",
        result,
    ))
}

pub async fn get_user(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let result = state.users.get_user(*id).await?;
    Ok(response::success(
        StatusCode::OK,
        "User fetched successfully",
        result,
    ))
}

pub async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let (limit, offset) = query.normalize();
    let result = state.users.list_users(limit, offset).await?;
    Ok(response::success(
        StatusCode::OK,
        "Users fetched successfully",
        result,
    ))
}

pub async fn update_user(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    payload: web::Json<UserUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .users
        .update_user_email(*id, payload.into_inner())
        .await?;
    Ok(response::message_only(
        StatusCode::OK,
        "User updated successfully",
    ))
}

pub async fn delete_user(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.users.delete_user(*id).await?;
    Ok(response::message_only(
        StatusCode::OK,
        "User deleted successfully",
    ))
}
