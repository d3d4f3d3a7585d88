use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    dto::cart::{AddToCartRequest, CartItemWithProduct, UpdateCartItemRequest},
    error::AppResult,
    extractors::{ValidatedJson, parse_id},
    response::MessageResponse,
    services::cart_service,
    state::AppState,
};

// `GET /{id}` takes a user id while `PUT`/`DELETE /{id}` take a cart item id;
// the router needs one parameter name per path.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_to_cart))
        .route(
            "/{id}",
            get(cart_list)
                .put(update_cart_item)
                .delete(remove_from_cart),
        )
        .route("/user/{user_id}", delete(clear_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Cart rows joined with their products", body = Vec<CartItemWithProduct>),
        (status = 400, description = "Invalid user ID"),
    ),
    tag = "Cart"
)]
pub async fn cart_list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<CartItemWithProduct>>> {
    let user_id = parse_id(&user_id, "Invalid user ID")?;
    let resp = cart_service::list_cart(&state, user_id)?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 201, description = "Add or merge cart item", body = CartItemWithProduct),
        (status = 400, description = "Invalid cart item data or not enough stock"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddToCartRequest>,
) -> AppResult<(StatusCode, Json<CartItemWithProduct>)> {
    let resp = cart_service::add_to_cart(&state, payload)?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/cart/{id}",
    params(
        ("id" = i32, Path, description = "Cart item ID")
    ),
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Updated cart item", body = CartItemWithProduct),
        (status = 400, description = "Invalid cart item ID or quantity"),
        (status = 404, description = "Cart item not found"),
    ),
    tag = "Cart"
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateCartItemRequest>,
) -> AppResult<Json<CartItemWithProduct>> {
    let id = parse_id(&id, "Invalid cart item ID")?;
    let resp = cart_service::update_cart_item(&state, id, payload)?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{id}",
    params(
        ("id" = i32, Path, description = "Cart item ID")
    ),
    responses(
        (status = 200, description = "Cart item removed", body = MessageResponse),
        (status = 400, description = "Invalid cart item ID"),
        (status = 404, description = "Cart item not found"),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, "Invalid cart item ID")?;
    let resp = cart_service::remove_from_cart(&state, id)?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart/user/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Cart cleared", body = MessageResponse),
        (status = 400, description = "Invalid user ID"),
    ),
    tag = "Cart"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let user_id = parse_id(&user_id, "Invalid user ID")?;
    let resp = cart_service::clear_cart(&state, user_id)?;
    Ok(Json(resp))
}
