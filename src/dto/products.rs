use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    extractors::Payload,
    models::{NewProduct, ProductUpdate},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[schema(value_type = String, example = "1250")]
    #[validate(custom(function = "crate::dto::non_negative"))]
    pub price: Decimal,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "Region is required"))]
    pub region: String,
    #[validate(length(min = 1, message = "Material is required"))]
    pub material: String,
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
    pub artisan_id: i32,
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,
    pub history: Option<String>,
    pub cultural_significance: Option<String>,
    pub featured: Option<bool>,
}

impl Payload for CreateProductRequest {
    const INVALID: &'static str = "Invalid product data";
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            category: req.category,
            region: req.region,
            material: req.material,
            image_url: req.image_url,
            artisan_id: req.artisan_id,
            stock: req.stock,
            history: req.history,
            cultural_significance: req.cultural_significance,
            featured: req.featured.unwrap_or(false),
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    #[validate(custom(function = "crate::dto::non_negative"))]
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub region: Option<String>,
    pub material: Option<String>,
    pub image_url: Option<String>,
    pub artisan_id: Option<i32>,
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: Option<i32>,
    pub history: Option<String>,
    pub cultural_significance: Option<String>,
    pub featured: Option<bool>,
}

impl Payload for UpdateProductRequest {
    const INVALID: &'static str = "Invalid product data";
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            category: req.category,
            region: req.region,
            material: req.material,
            image_url: req.image_url,
            artisan_id: req.artisan_id,
            stock: req.stock,
            history: req.history,
            cultural_significance: req.cultural_significance,
            featured: req.featured,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuery {
    pub q: Option<String>,
}
