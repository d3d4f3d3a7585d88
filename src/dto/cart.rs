use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    extractors::Payload,
    models::{CartItem, NewCartItem, Product},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub user_id: i32,
    pub product_id: i32,
    #[validate(range(min = 1, message = "quantity must be greater than 0"))]
    pub quantity: i32,
}

impl Payload for AddToCartRequest {
    const INVALID: &'static str = "Invalid cart item data";
}

impl From<&AddToCartRequest> for NewCartItem {
    fn from(req: &AddToCartRequest) -> Self {
        Self {
            user_id: req.user_id,
            product_id: req.product_id,
            quantity: req.quantity,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCartItemRequest {
    #[validate(range(min = 1, message = "Invalid quantity"))]
    pub quantity: i32,
}

impl Payload for UpdateCartItemRequest {
    const INVALID: &'static str = "Invalid quantity";
}

/// A cart row joined with its product. The product is absent when it has
/// been deleted since the row was added.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartItemWithProduct {
    #[serde(flatten)]
    pub item: CartItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}
