use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    extractors::Payload,
    models::{NewOrder, NewOrderItem, Order, OrderItem, Product},
};

/// Body of `POST /api/orders`.
///
/// Both parts stay raw JSON here: the order and each item are validated one
/// after the other while the order is being placed, so a bad item only
/// fails once the items before it have been stored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[schema(value_type = CreateOrderRequest)]
    pub order: Value,
    #[schema(value_type = Vec<OrderItemRequest>)]
    pub order_items: Vec<Value>,
}

impl Payload for PlaceOrderRequest {
    const INVALID: &'static str = "Invalid order data";
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: i32,
    #[schema(value_type = String, example = "2100.00")]
    #[validate(custom(function = "crate::dto::non_negative"))]
    pub total_amount: Decimal,
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
    /// Defaults to the time the order is stored.
    pub created_at: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "Shipping address is required"))]
    pub shipping_address: String,
    #[validate(length(min = 1, message = "Payment method is required"))]
    pub payment_method: String,
}

impl Payload for CreateOrderRequest {
    const INVALID: &'static str = "Invalid order data";
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        Self {
            user_id: req.user_id,
            total_amount: req.total_amount,
            status: req.status,
            created_at: req.created_at.unwrap_or_else(Utc::now),
            shipping_address: req.shipping_address,
            payment_method: req.payment_method,
        }
    }
}

/// One line of an order. Any `orderId` sent by the client is ignored; the
/// id of the order being placed is used instead.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: i32,
    #[validate(range(min = 1, message = "quantity must be greater than 0"))]
    pub quantity: i32,
    #[schema(value_type = String, example = "1050")]
    #[validate(custom(function = "crate::dto::non_negative"))]
    pub price: Decimal,
}

impl Payload for OrderItemRequest {
    const INVALID: &'static str = "Invalid order data";
}

impl OrderItemRequest {
    pub fn into_new(self, order_id: i32) -> NewOrderItem {
        NewOrderItem {
            order_id,
            product_id: self.product_id,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

impl Payload for UpdateOrderStatusRequest {
    const INVALID: &'static str = "Invalid order status";
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    pub order: Order,
    pub order_items: Vec<OrderItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemWithProduct {
    #[serde(flatten)]
    pub item: OrderItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItemWithProduct>,
}
