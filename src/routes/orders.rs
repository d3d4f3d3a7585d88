use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
};

use crate::{
    dto::orders::{OrderWithItems, PlaceOrderRequest, PlacedOrder, UpdateOrderStatusRequest},
    error::AppResult,
    extractors::{ValidatedJson, parse_id},
    models::Order,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(place_order))
        .route("/user/{user_id}", get(list_user_orders))
        .route("/{id}", get(get_order))
        .route("/{id}/status", patch(update_order_status))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order and its items; stock is decremented and the cart emptied", body = PlacedOrder),
        (status = 400, description = "Invalid order data"),
    ),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PlaceOrderRequest>,
) -> AppResult<(StatusCode, Json<PlacedOrder>)> {
    let resp = order_service::place_order(&state, payload)?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/orders/user/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Orders with items and products", body = Vec<OrderWithItems>),
        (status = 400, description = "Invalid user ID"),
    ),
    tag = "Orders"
)]
pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<OrderWithItems>>> {
    let user_id = parse_id(&user_id, "Invalid user ID")?;
    let resp = order_service::list_user_orders(&state, user_id)?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with items", body = OrderWithItems),
        (status = 400, description = "Invalid order ID"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderWithItems>> {
    let id = parse_id(&id, "Invalid order ID")?;
    let resp = order_service::get_order(&state, id)?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Update order status", body = Order),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderStatusRequest>,
) -> AppResult<Json<Order>> {
    let id = parse_id(&id, "Invalid order ID")?;
    let resp = order_service::update_order_status(&state, id, payload)?;
    Ok(Json(resp))
}
