/// Order endpoints; every route is owner-scoped via the authenticated caller.
use actix_web::{http::StatusCode, web, HttpResponse};

use crate::app_state::AppState;
use crate::error::AppError;
use crate::middleware::UserId;
use crate::models::order::{OrderCreateRequest, OrderListQuery, OrderUpdateRequest};
use crate::response;

pub async fn create_order(
    state: web::Data<AppState>,
    user_id: UserId,
    payload: web::Json<OrderCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state
        .orders
        .create_order(payload.into_inner(), user_id.0)
        .await?;

    Ok(response::success(
        StatusCode::OK,
        "Order Created Successfully",
        result,
    ))
}

pub async fn get_order(
    state: web::Data<AppState>,
    user_id: UserId,
    consignment_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result = state
        .orders
        .get_order(&consignment_id, user_id.0)
        .await?;

    Ok(response::success(
        StatusCode::OK,
        "Order successfully fetched",
        result,
    ))
}

pub async fn list_orders(
    state: web::Data<AppState>,
    user_id: UserId,
    query: web::Query<OrderListQuery>,
) -> Result<HttpResponse, AppError> {
    let result = state
        .orders
        .list_orders(user_id.0, query.order_status, query.page, query.limit)
        .await?;

    Ok(response::success(
        StatusCode::OK,
        "Successfully fetched orders",
        result,
    ))
}

pub async fn update_order(
    state: web::Data<AppState>,
    user_id: UserId,
    consignment_id: web::Path<String>,
    payload: web::Json<OrderUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .orders
        .update_order(&consignment_id, payload.into_inner(), user_id.0)
        .await?;

    Ok(response::message_only(
        StatusCode::OK,
        "Successfully updated order",
    ))
}

pub async fn cancel_order(
    state: web::Data<AppState>,
    user_id: UserId,
    consignment_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state
        .orders
        .cancel_order(&consignment_id, user_id.0)
        .await?;

    Ok(response::message_only(
        StatusCode::OK,
        "Order Cancelled Successfully",
    ))
}

pub async fn delete_order(
    state: web::Data<AppState>,
    user_id: UserId,
    consignment_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state
        .orders
        .delete_order(&consignment_id, user_id.0)
        .await?;

    Ok(response::message_only(
        StatusCode::OK,
        "Successfully deleted order",
    ))
}
