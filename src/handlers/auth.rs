/// Authentication endpoints.
use actix_web::{http::StatusCode, web, HttpResponse};

use crate::app_state::AppState;
use crate::error::AppError;
use crate::middleware::AccessToken;
use crate::models::user::LoginRequest;
use crate::response;

pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state.auth.login(payload.into_inner()).await?;
    Ok(response::success(
        StatusCode::OK,
        "Successfully logged in",
        result,
    ))
}

pub async fn logout(
    state: web::Data<AppState>,
    token: AccessToken,
) -> Result<HttpResponse, AppError> {
    state.auth.logout(&token.0).await?;
    Ok(response::message_only(
        StatusCode::OK,
        "Successfully logged out",
    ))
}
