use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::{IntoResponse, Json},
};
use serde_json::Value as JsonValue;

use crate::{
    dto::order_dto::{NewOrder, OrderPatch, OrderResponse},
    error::Result,
    AppState,
};

pub const ORDER_CREATED: &str = "Добавлен новый заказ!";
pub const ORDER_UPDATED: &str = "Обновление информации о заказе выполнено!";
pub const ORDER_DELETED: &str = "Удаление заказа выполнено!";

#[utoipa::path(
    get,
    path = "/orders/",
    tag = "orders",
    responses(
        (status = 200, description = "All orders in insertion order", body = [OrderResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_orders(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let orders = state.order_service.list_all().await?;
    let body: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/orders/",
    tag = "orders",
    request_body = NewOrder,
    responses(
        (status = 200, description = "Order created", body = String),
        (status = 400, description = "Missing date, date not in MM/DD/YYYY form or malformed body")
    )
)]
#[axum::debug_handler]
pub async fn create_order(
    State(state): State<AppState>,
    payload: std::result::Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(body) = payload?;
    state.order_service.create(NewOrder::from_json(body)?).await?;
    Ok(ORDER_CREATED)
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "orders",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found")
    )
)]
#[axum::debug_handler]
pub async fn get_order(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    let order = state.order_service.get_by_id(id).await?;
    Ok(Json(OrderResponse::from(order)))
}

#[utoipa::path(
    put,
    path = "/orders/{id}",
    tag = "orders",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    request_body = OrderPatch,
    responses(
        (status = 200, description = "Order updated", body = String),
        (status = 400, description = "Date not in MM/DD/YYYY form or malformed body"),
        (status = 404, description = "Order not found")
    )
)]
#[axum::debug_handler]
pub async fn update_order(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
    payload: std::result::Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    let Json(body) = payload?;
    state
        .order_service
        .update(id, OrderPatch::from_json(body)?)
        .await?;
    Ok(ORDER_UPDATED)
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = "orders",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order deleted", body = String),
        (status = 404, description = "Order not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_order(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    state.order_service.delete(id).await?;
    Ok(ORDER_DELETED)
}
