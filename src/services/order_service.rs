use crate::{
    dto::orders::{
        CreateOrderRequest, OrderItemRequest, OrderItemWithProduct, OrderWithItems,
        PlaceOrderRequest, PlacedOrder, UpdateOrderStatusRequest,
    },
    error::{AppError, AppResult},
    extractors::validated_json::from_value,
    models::{Order, OrderItem, ProductUpdate},
    state::AppState,
};

/// Places an order: create the order, then each item (taking its quantity off
/// the product's stock right away), then empty the buyer's cart.
///
/// There is no rollback. When item `k` fails validation the order, items
/// before `k` and their stock changes stay stored and the cart is kept.
pub fn place_order(
    state: &AppState,
    payload: PlaceOrderRequest,
) -> AppResult<PlacedOrder> {
    let PlaceOrderRequest { order, order_items } = payload;

    let order_data: CreateOrderRequest = from_value(order)?;
    let order = state.storage.create_order(order_data.into());
    tracing::info!(
        order_id = order.id,
        user_id = order.user_id,
        items = order_items.len(),
        "order created"
    );

    let mut created = Vec::with_capacity(order_items.len());
    for (index, raw) in order_items.into_iter().enumerate() {
        let item: OrderItemRequest = match from_value(raw) {
            Ok(item) => item,
            Err(err) => {
                tracing::warn!(
                    order_id = order.id,
                    index,
                    stored = created.len(),
                    "order item rejected, earlier items are kept"
                );
                return Err(err);
            }
        };

        let order_item = state.storage.create_order_item(item.into_new(order.id));
        consume_stock(state, &order_item);
        created.push(order_item);
    }

    state.storage.clear_cart(order.user_id);
    tracing::info!(order_id = order.id, user_id = order.user_id, "order placed");

    Ok(PlacedOrder {
        order,
        order_items: created,
    })
}

// Goes through the regular product update. Stock may drop below zero and
// saturates at `i32::MIN`.
fn consume_stock(state: &AppState, item: &OrderItem) {
    let Some(product) = state.storage.get_product(item.product_id) else {
        return;
    };

    let remaining = product.stock.saturating_sub(item.quantity);
    if remaining < 0 {
        tracing::warn!(
            product_id = product.id,
            stock = product.stock,
            ordered = item.quantity,
            "stock went negative"
        );
    }
    state
        .storage
        .update_product(product.id, ProductUpdate::stock(remaining));
}

fn with_items(state: &AppState, order: Order) -> OrderWithItems {
    let items = state
        .storage
        .get_order_items(order.id)
        .into_iter()
        .map(|item| {
            let product = state.storage.get_product(item.product_id);
            OrderItemWithProduct { item, product }
        })
        .collect();
    OrderWithItems { order, items }
}

pub fn list_user_orders(state: &AppState, user_id: i32) -> AppResult<Vec<OrderWithItems>> {
    Ok(state
        .storage
        .get_orders(user_id)
        .into_iter()
        .map(|order| with_items(state, order))
        .collect())
}

pub fn get_order(state: &AppState, id: i32) -> AppResult<OrderWithItems> {
    let order = state
        .storage
        .get_order(id)
        .ok_or_else(|| AppError::not_found("Order not found"))?;

    Ok(with_items(state, order))
}

pub fn update_order_status(
    state: &AppState,
    id: i32,
    payload: UpdateOrderStatusRequest,
) -> AppResult<Order> {
    let order = state
        .storage
        .update_order_status(id, &payload.status)
        .ok_or_else(|| AppError::not_found("Order not found"))?;
    tracing::info!(order_id = order.id, status = %order.status, "order status updated");

    Ok(order)
}
