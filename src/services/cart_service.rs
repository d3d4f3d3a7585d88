use crate::{
    dto::cart::{AddToCartRequest, CartItemWithProduct, UpdateCartItemRequest},
    error::{AppError, AppResult},
    models::{CartItem, NewCartItem},
    response::MessageResponse,
    state::AppState,
};

fn with_product(state: &AppState, item: CartItem) -> CartItemWithProduct {
    let product = state.storage.get_product(item.product_id);
    CartItemWithProduct { item, product }
}

pub fn list_cart(state: &AppState, user_id: i32) -> AppResult<Vec<CartItemWithProduct>> {
    Ok(state
        .storage
        .get_cart_items(user_id)
        .into_iter()
        .map(|item| with_product(state, item))
        .collect())
}

/// Adds to the cart, merging with an existing row for the same product.
///
/// Stock is compared with the requested quantity alone; whatever the user
/// already has in the cart for this product is not counted. A merge whose
/// total does not fit an `i32` is rejected.
pub fn add_to_cart(state: &AppState, payload: AddToCartRequest) -> AppResult<CartItemWithProduct> {
    let product = state
        .storage
        .get_product(payload.product_id)
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    if product.stock < payload.quantity {
        return Err(AppError::bad_request("Not enough stock available"));
    }

    let in_cart = state
        .storage
        .get_cart_items(payload.user_id)
        .into_iter()
        .find(|row| row.product_id == payload.product_id)
        .map_or(0, |row| row.quantity);
    if in_cart.checked_add(payload.quantity).is_none() {
        return Err(AppError::bad_request("Cart quantity is too large"));
    }

    let cart_item = state.storage.add_to_cart(NewCartItem::from(&payload));
    tracing::info!(
        user_id = cart_item.user_id,
        product_id = cart_item.product_id,
        quantity = cart_item.quantity,
        "cart updated"
    );

    Ok(CartItemWithProduct {
        item: cart_item,
        product: Some(product),
    })
}

pub fn update_cart_item(
    state: &AppState,
    id: i32,
    payload: UpdateCartItemRequest,
) -> AppResult<CartItemWithProduct> {
    let cart_item = state
        .storage
        .update_cart_item(id, payload.quantity)
        .ok_or_else(|| AppError::not_found("Cart item not found"))?;
    tracing::info!(cart_item_id = id, quantity = cart_item.quantity, "cart item updated");

    Ok(with_product(state, cart_item))
}

pub fn remove_from_cart(state: &AppState, id: i32) -> AppResult<MessageResponse> {
    if !state.storage.remove_from_cart(id) {
        return Err(AppError::not_found("Cart item not found"));
    }
    tracing::info!(cart_item_id = id, "cart item removed");

    Ok(MessageResponse::new("Cart item removed successfully"))
}

pub fn clear_cart(state: &AppState, user_id: i32) -> AppResult<MessageResponse> {
    state.storage.clear_cart(user_id);
    tracing::info!(user_id, "cart cleared");

    Ok(MessageResponse::new("Cart cleared successfully"))
}
