use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored user. Artisans are users with `is_artisan` set.
///
/// `password` is never serialized; responses go through [`PublicUser`] or
/// [`ReviewAuthor`] anyway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub is_artisan: bool,
    pub bio: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub is_artisan: bool,
    pub bio: Option<String>,
    pub region: Option<String>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            email: user.email,
            phone_number: user.phone_number,
            address: user.address,
            is_artisan: user.is_artisan,
            bio: user.bio,
            region: user.region,
        }
    }
}

/// The slice of a user embedded in review payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewAuthor {
    pub id: i32,
    pub name: String,
    pub username: String,
}

impl From<&User> for ReviewAuthor {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "1250")]
    pub price: Decimal,
    pub category: String,
    pub region: String,
    pub material: String,
    pub image_url: String,
    pub artisan_id: i32,
    pub stock: i32,
    pub history: Option<String>,
    pub cultural_significance: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    #[schema(value_type = String, example = "2100.00")]
    pub total_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub shipping_address: String,
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    #[schema(value_type = String, example = "1050")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

// Insertable shapes. The storage layer assigns `id`.

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub is_artisan: bool,
    pub bio: Option<String>,
    pub region: Option<String>,
}

impl NewUser {
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
            is_artisan: self.is_artisan,
            bio: self.bio,
            region: self.region,
        }
    }
}

/// Partial user update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub is_artisan: Option<bool>,
    pub bio: Option<String>,
    pub region: Option<String>,
}

impl UserUpdate {
    pub fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if self.phone_number.is_some() {
            user.phone_number = self.phone_number;
        }
        if self.address.is_some() {
            user.address = self.address;
        }
        if let Some(is_artisan) = self.is_artisan {
            user.is_artisan = is_artisan;
        }
        if self.bio.is_some() {
            user.bio = self.bio;
        }
        if self.region.is_some() {
            user.region = self.region;
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub region: String,
    pub material: String,
    pub image_url: String,
    pub artisan_id: i32,
    pub stock: i32,
    pub history: Option<String>,
    pub cultural_significance: Option<String>,
    pub featured: bool,
}

impl NewProduct {
    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            region: self.region,
            material: self.material,
            image_url: self.image_url,
            artisan_id: self.artisan_id,
            stock: self.stock,
            history: self.history,
            cultural_significance: self.cultural_significance,
            featured: self.featured,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub region: Option<String>,
    pub material: Option<String>,
    pub image_url: Option<String>,
    pub artisan_id: Option<i32>,
    pub stock: Option<i32>,
    pub history: Option<String>,
    pub cultural_significance: Option<String>,
    pub featured: Option<bool>,
}

impl ProductUpdate {
    /// Only touches stock; used when an order consumes inventory.
    pub fn stock(stock: i32) -> Self {
        Self {
            stock: Some(stock),
            ..Self::default()
        }
    }

    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(region) = self.region {
            product.region = region;
        }
        if let Some(material) = self.material {
            product.material = material;
        }
        if let Some(image_url) = self.image_url {
            product.image_url = image_url;
        }
        if let Some(artisan_id) = self.artisan_id {
            product.artisan_id = artisan_id;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if self.history.is_some() {
            product.history = self.history;
        }
        if self.cultural_significance.is_some() {
            product.cultural_significance = self.cultural_significance;
        }
        if let Some(featured) = self.featured {
            product.featured = featured;
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewRegion {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i32,
    pub total_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub shipping_address: String,
    pub payment_method: String,
}

#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: Decimal,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}
